//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Hintergrund-Ergebnisse auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.label());
        use super::handlers;

        match command {
            // === Feed ===
            AppCommand::RequestRefresh => handlers::feed::request_refresh(state),
            AppCommand::ApplyFeedRecords { records } => handlers::feed::apply_records(state, records),
            AppCommand::ReportFeedFailure { message } => {
                handlers::feed::report_failure(state, &message)
            }

            // === Selektion & Popup ===
            AppCommand::SelectPharmacy { record_id } => {
                handlers::selection::select_pharmacy(state, &record_id)
            }
            AppCommand::PickMarkerAt { pos_px } => {
                handlers::selection::pick_marker_at(state, pos_px)
            }
            AppCommand::ClosePopup => handlers::selection::close_popup(state),

            // === Kamera & Viewport ===
            AppCommand::PanCamera { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::ZoomCamera { factor, focus_px } => {
                handlers::view::zoom(state, factor, focus_px)
            }
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ResetView => handlers::view::reset_view(state),

            // === Optionen & Lifecycle ===
            AppCommand::RequestOptionsDialog => handlers::options::request_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::options::close_dialog(state),
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options)?,
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }
}
