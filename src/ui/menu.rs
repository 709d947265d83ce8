//! Top-Menü (File, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let refresh_label = if state.ui.fetch_in_flight {
                    "Refreshing..."
                } else {
                    "Refresh Feed (F5)"
                };

                if ui
                    .add_enabled(!state.ui.fetch_in_flight, egui::Button::new(refresh_label))
                    .clicked()
                {
                    events.push(AppIntent::RefreshRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset View").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
