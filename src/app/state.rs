//! Application State — zentrale Datenhaltung.

use std::sync::Arc;

use crate::core::{GeoPoint, MapCamera, PharmacyRecord, PharmacySet};
use crate::shared::ViewerOptions;

use super::command_log::CommandLog;

/// Lebenszyklus der Kartenansicht.
///
/// Der Übergang nach `Ready` feuert genau einmal beim ersten
/// erfolgreichen Feed-Refresh und initialisiert das Viewport-Zentrum.
/// Spätere Refreshes tauschen nur noch die Marker aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapPhase {
    /// Noch kein erfolgreicher Refresh
    #[default]
    Uninitialized,
    /// Viewport initialisiert, Marker werden pro Refresh ersetzt
    Ready,
}

/// View-bezogener Anwendungszustand
pub struct ViewState {
    /// Lebenszyklus-Phase der Kartenansicht
    pub phase: MapPhase,
    /// Slippy-Map-Kamera
    pub camera: MapCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (Kamera auf Fallback-Zentrum).
    pub fn new(options: &ViewerOptions) -> Self {
        let fallback = GeoPoint::new(options.fallback_center[0], options.fallback_center[1]);
        Self {
            phase: MapPhase::Uninitialized,
            camera: MapCamera::new(fallback, options.initial_zoom),
            viewport_size: [0.0, 0.0],
        }
    }
}

/// Der eine aktuell fokussierte Marker.
///
/// Wird immer im "rot/selektiert"-Stil gezeichnet, unabhängig von der
/// Farbstufe des Records.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusMarker {
    /// Feed-ID des ausgewählten Records
    pub record_id: String,
    /// Position des Markers
    pub position: GeoPoint,
}

/// Auswahlbezogener Anwendungszustand.
///
/// Höchstens ein Fokus-Marker; eine neue Auswahl ersetzt den alten.
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    /// Aktueller Fokus-Marker (None = keine Auswahl)
    pub marker: Option<FocusMarker>,
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Feed-ID des Records im geöffneten Detail-Popup
    pub popup_record_id: Option<String>,
    /// Temporäre Statusnachricht (z.B. Fetch-Fehler)
    pub status_message: Option<String>,
    /// Signalisiert dem Host, einen neuen Feed-Refresh zu starten
    pub refresh_requested: bool,
    /// Aktuell läuft ein Fetch (für Spinner/Repaint)
    pub fetch_in_flight: bool,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host, den Kachel-Layer neu aufzubauen
    pub tiles_dirty: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktiver Apotheken-Datensatz (None = noch kein Refresh)
    pub pharmacies: Option<Arc<PharmacySet>>,
    /// View-State
    pub view: ViewState,
    /// Fokus-State
    pub focus: FocusState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Feed, Kacheln, Farben)
    pub options: ViewerOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Default-Optionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen App-State mit den übergebenen Optionen.
    pub fn with_options(options: ViewerOptions) -> Self {
        Self {
            pharmacies: None,
            view: ViewState::new(&options),
            focus: FocusState::default(),
            ui: UiState::new(),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl aktiver Records zurück (für UI-Anzeige).
    pub fn record_count(&self) -> usize {
        self.pharmacies.as_ref().map_or(0, |set| set.len())
    }

    /// Sucht einen Record im aktiven Datensatz.
    pub fn find_record(&self, record_id: &str) -> Option<&PharmacyRecord> {
        self.pharmacies.as_ref()?.find(record_id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
