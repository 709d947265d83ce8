//! Intent → Command Mapping (reine Übersetzung, keine Mutation).

use super::{AppCommand, AppIntent, AppState};

/// Bildet einen Intent auf die auszuführenden Commands ab.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::RefreshRequested => vec![AppCommand::RequestRefresh],
        AppIntent::FeedArrived { records } => vec![AppCommand::ApplyFeedRecords { records }],
        AppIntent::FeedFailed { message } => vec![AppCommand::ReportFeedFailure { message }],
        AppIntent::PharmacySelected { record_id } => {
            vec![AppCommand::SelectPharmacy { record_id }]
        }
        AppIntent::PopupCloseRequested => vec![AppCommand::ClosePopup],
        AppIntent::MapClicked { pos_px } => vec![AppCommand::PickMarkerAt { pos_px }],
        AppIntent::CameraPan { delta_px } => vec![AppCommand::PanCamera { delta_px }],
        AppIntent::CameraZoom { factor, focus_px } => {
            vec![AppCommand::ZoomCamera { factor, focus_px }]
        }
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::RequestOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
