use crate::core::PharmacyRecord;
use crate::shared::ViewerOptions;

/// App-Intents: Eingaben aus UI und Hintergrund-Tasks ohne eigene
/// Mutationslogik. Werden vom Controller auf Commands abgebildet.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neuen Feed-Refresh anfordern
    RefreshRequested,
    /// Ein Fetch-Durchlauf hat normalisierte Records geliefert
    FeedArrived { records: Vec<PharmacyRecord> },
    /// Ein Fetch-Durchlauf ist fehlgeschlagen
    FeedFailed { message: String },
    /// Apotheke aus Liste oder Popup ausgewählt
    PharmacySelected { record_id: String },
    /// Detail-Popup schließen
    PopupCloseRequested,
    /// Klick in den Karten-Viewport (Viewport-relative Pixel)
    MapClicked { pos_px: glam::Vec2 },
    /// Kamera um ein Screen-Pixel-Delta verschieben
    CameraPan { delta_px: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus_px: Option<glam::Vec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Ansicht auf Start-Position und Anfangszoom zurücksetzen
    ResetViewRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: ViewerOptions },
    /// Anwendung beenden
    ExitRequested,
}
