//! Render-Szene als expliziter Übergabevertrag zwischen App und Painter.
//!
//! Wird jeden Frame als reine Funktion des AppState neu gebaut; der
//! mutierbare egui-Painter und der Kachel-Layer bleiben außen vor.

use glam::Vec2;

use crate::app::{AppState, MapPhase};
use crate::core::{cluster_markers, MapCamera, MarkerGroup};

/// Inhalt des Detail-Popups einer ausgewählten Apotheke.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    /// Feed-ID des Records
    pub record_id: String,
    /// Anzeigename
    pub name: String,
    /// Adresse
    pub address: String,
    /// Telefonnummer
    pub phone: String,
    /// Bestand Erwachsenen-Masken
    pub mask_adult: i64,
    /// Bestand Kinder-Masken
    pub mask_child: i64,
    /// Zeitstempel der letzten Aktualisierung
    pub updated: String,
    /// Freitext-Hinweis
    pub note: String,
    /// Screen-Position des zugehörigen Markers (Viewport-relativ)
    pub anchor_px: Vec2,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct MapScene {
    /// Lebenszyklus-Phase der Kartenansicht
    pub phase: MapPhase,
    /// Kamera-Zustand für diesen Frame
    pub camera: MapCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Geclusterte Marker (komplett neu gebaut, kein Diffing)
    pub markers: Vec<MarkerGroup>,
    /// Screen-Position des Fokus-Markers, falls vorhanden
    pub focus_px: Option<Vec2>,
    /// Detail-Popup, falls geöffnet
    pub popup: Option<PopupContent>,
}

impl MapScene {
    /// Baut die Szene aus dem aktuellen AppState.
    pub fn build(state: &AppState) -> Self {
        let camera = state.view.camera;
        let viewport_size = state.view.viewport_size;

        let markers = state
            .pharmacies
            .as_deref()
            .map(|set| {
                cluster_markers(
                    set.records(),
                    &camera,
                    viewport_size,
                    state.options.cluster_cell_px,
                )
            })
            .unwrap_or_default();

        let focus_px = state
            .focus
            .marker
            .as_ref()
            .map(|marker| camera.geo_to_screen(marker.position, viewport_size));

        let popup = state
            .ui
            .popup_record_id
            .as_deref()
            .and_then(|id| state.find_record(id))
            .map(|record| PopupContent {
                record_id: record.id.clone(),
                name: record.name.clone(),
                address: record.address.clone(),
                phone: record.phone.clone(),
                mask_adult: record.mask_adult,
                mask_child: record.mask_child,
                updated: record.updated.clone(),
                note: record.note.clone(),
                anchor_px: camera.geo_to_screen(record.position, viewport_size),
            });

        Self {
            phase: state.view.phase,
            camera,
            viewport_size,
            markers,
            focus_px,
            popup,
        }
    }

    /// Anzahl der Marker-Gruppen (Einzelmarker + Cluster-Badges).
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Gibt zurück, ob bereits Kartendaten vorliegen.
    pub fn has_data(&self) -> bool {
        self.phase == MapPhase::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppController, AppIntent};
    use crate::core::{GeoPoint, PharmacyRecord};

    fn record(id: &str, lat: f64, lng: f64, adult: i64) -> PharmacyRecord {
        PharmacyRecord {
            id: id.to_string(),
            name: format!("Apotheke {}", id),
            address: "台北市".to_string(),
            phone: "0212345678".to_string(),
            note: String::new(),
            mask_adult: adult,
            mask_child: 0,
            updated: "2020/02/21 14:42".to_string(),
            position: GeoPoint::new(lat, lng),
        }
    }

    fn ready_state() -> crate::app::AppState {
        let mut controller = AppController::new();
        let mut state = crate::app::AppState::new();
        state.view.viewport_size = [800.0, 600.0];

        controller
            .handle_intent(
                &mut state,
                AppIntent::FeedArrived {
                    records: vec![
                        record("a", 25.0677505, 121.5470599, 120),
                        record("b", 25.0700000, 121.5500000, 30),
                    ],
                },
            )
            .expect("Refresh sollte durchlaufen");
        state
    }

    #[test]
    fn test_scene_build_is_idempotent() {
        let state = ready_state();

        let first = MapScene::build(&state);
        let second = MapScene::build(&state);

        assert_eq!(first.marker_count(), second.marker_count());
        assert!(first.marker_count() > 0);
    }

    #[test]
    fn test_focus_marker_appears_in_scene() {
        let mut state = ready_state();
        let mut controller = AppController::new();

        controller
            .handle_intent(
                &mut state,
                AppIntent::PharmacySelected {
                    record_id: "a".to_string(),
                },
            )
            .expect("Auswahl sollte durchlaufen");

        let scene = MapScene::build(&state);
        let focus = scene.focus_px.expect("Fokus-Marker erwartet");

        // Die Kamera zentriert auf die Auswahl → Fokus in Viewport-Mitte
        assert!((focus.x - 400.0).abs() < 1.0);
        assert!((focus.y - 300.0).abs() < 1.0);

        let popup = scene.popup.expect("Popup erwartet");
        assert_eq!(popup.name, "Apotheke a");
        assert_eq!(popup.mask_adult, 120);
    }

    #[test]
    fn test_empty_state_builds_empty_scene() {
        let state = crate::app::AppState::new();
        let scene = MapScene::build(&state);

        assert_eq!(scene.marker_count(), 0);
        assert!(scene.focus_px.is_none());
        assert!(scene.popup.is_none());
        assert!(!scene.has_data());
    }
}
