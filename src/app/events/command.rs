use crate::core::PharmacyRecord;
use crate::shared::ViewerOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Feed-Refresh beim Host anfordern (setzt das Request-Flag)
    RequestRefresh,
    /// Gelieferte Records als neuen Datensatz übernehmen
    ApplyFeedRecords { records: Vec<PharmacyRecord> },
    /// Fetch-Fehler melden, Datensatz unverändert lassen
    ReportFeedFailure { message: String },
    /// Apotheke fokussieren (Kamera, Fokus-Marker, Popup)
    SelectPharmacy { record_id: String },
    /// Nächstgelegenen Marker zur Klickposition auswählen
    PickMarkerAt { pos_px: glam::Vec2 },
    /// Detail-Popup schließen
    ClosePopup,
    /// Kamera um Screen-Pixel-Delta verschieben
    PanCamera { delta_px: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f64,
        focus_px: Option<glam::Vec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Ansicht auf Start-Position zurücksetzen
    ResetView,
    /// Options-Dialog anfordern
    RequestOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Geänderte Optionen übernehmen und persistieren
    ApplyOptions { options: ViewerOptions },
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Kompaktes Label für das Command-Log (ohne Nutzdaten — Feed-Records
    /// können groß sein).
    pub fn label(&self) -> &'static str {
        match self {
            AppCommand::RequestRefresh => "RequestRefresh",
            AppCommand::ApplyFeedRecords { .. } => "ApplyFeedRecords",
            AppCommand::ReportFeedFailure { .. } => "ReportFeedFailure",
            AppCommand::SelectPharmacy { .. } => "SelectPharmacy",
            AppCommand::PickMarkerAt { .. } => "PickMarkerAt",
            AppCommand::ClosePopup => "ClosePopup",
            AppCommand::PanCamera { .. } => "PanCamera",
            AppCommand::ZoomCamera { .. } => "ZoomCamera",
            AppCommand::ZoomIn => "ZoomIn",
            AppCommand::ZoomOut => "ZoomOut",
            AppCommand::SetViewportSize { .. } => "SetViewportSize",
            AppCommand::ResetView => "ResetView",
            AppCommand::RequestOptionsDialog => "RequestOptionsDialog",
            AppCommand::CloseOptionsDialog => "CloseOptionsDialog",
            AppCommand::ApplyOptions { .. } => "ApplyOptions",
            AppCommand::RequestExit => "RequestExit",
        }
    }
}
