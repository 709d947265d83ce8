//! Optionen-Dialog für Feed, Kachel-Provider und Marker-Darstellung.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    // ── Feed ────────────────────────────────────────
                    ui.collapsing("Feed", |ui| {
                        ui.label("Feed-URL:");
                        changed |= ui
                            .add(egui::TextEdit::singleline(&mut opts.feed_url).desired_width(340.0))
                            .changed();
                    });

                    // ── Kacheln ─────────────────────────────────────
                    ui.collapsing("Kartenkacheln", |ui| {
                        ui.label("URL-Template:");
                        changed |= ui
                            .add(
                                egui::TextEdit::singleline(&mut opts.tile_url_template)
                                    .desired_width(340.0),
                            )
                            .changed();
                        ui.label("Access-Token:");
                        changed |= ui
                            .add(
                                egui::TextEdit::singleline(&mut opts.tile_access_token)
                                    .desired_width(340.0),
                            )
                            .changed();
                    });

                    // ── Viewport ────────────────────────────────────
                    ui.collapsing("Viewport", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Start-Zoom:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.initial_zoom)
                                        .range(3.0..=18.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Fokus-Zoom:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.focus_zoom)
                                        .range(3.0..=18.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Fallback-Zentrum (Lat/Lng):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.fallback_center[0])
                                        .range(-85.0..=85.0)
                                        .speed(0.001),
                                )
                                .changed();
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.fallback_center[1])
                                        .range(-180.0..=180.0)
                                        .speed(0.001),
                                )
                                .changed();
                        });
                    });

                    // ── Marker ──────────────────────────────────────
                    ui.collapsing("Marker", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Marker-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.marker_radius_px)
                                        .range(3.0..=20.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Cluster-Zelle (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.cluster_cell_px)
                                        .range(16.0..=128.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Grün (>100):", &mut opts.tier_color_green);
                        changed |= color_edit(ui, "Gelb (>50):", &mut opts.tier_color_yellow);
                        changed |= color_edit(ui, "Rot (>0):", &mut opts.tier_color_red);
                        changed |= color_edit(ui, "Grau (leer):", &mut opts.tier_color_grey);
                        changed |= color_edit(ui, "Cluster:", &mut opts.cluster_color);
                        changed |= color_edit(ui, "Fokus:", &mut opts.focus_color);
                    });
                });

            ui.separator();
            if ui.button("Schließen").clicked() {
                events.push(AppIntent::CloseOptionsDialogRequested);
            }
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui.color_edit_button_rgba_unmultiplied(color).changed();
    });
    changed
}
