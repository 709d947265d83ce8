//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, MapPhase};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.view.phase {
                MapPhase::Uninitialized => {
                    ui.label("Waiting for first feed refresh");
                }
                MapPhase::Ready => {
                    ui.label(format!("Pharmacies with stock: {}", state.record_count()));
                }
            }

            ui.separator();

            ui.label(format!(
                "Zoom: {:.1} | Center: ({:.4}, {:.4})",
                state.view.camera.zoom,
                state.view.camera.center.lat,
                state.view.camera.center.lng
            ));

            if state.ui.fetch_in_flight {
                ui.separator();
                ui.spinner();
                ui.label("Updating feed...");
            }

            // Statusnachricht (z.B. Fetch-Fehler)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
