//! Seitenpanel mit der Liste aller Apotheken des aktiven Datensatzes.

use crate::app::{AppIntent, AppState};

/// Zeilenhöhe der Listen-Einträge in Pixeln.
const ROW_HEIGHT: f32 = 22.0;

/// Rendert das Apotheken-Listen-Panel; Klick auf einen Eintrag wählt
/// die Apotheke aus.
pub fn render_list_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("pharmacy_list")
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Pharmacies");

            let Some(set) = state.pharmacies.as_deref() else {
                ui.label("No data yet");
                return;
            };

            ui.label(format!("{} with stock", set.len()));
            ui.separator();

            let records = set.records();
            egui::ScrollArea::vertical().auto_shrink([false, false]).show_rows(
                ui,
                ROW_HEIGHT,
                records.len(),
                |ui, row_range| {
                    for index in row_range {
                        let record = &records[index];
                        let tier_color = color32(state.options.tier_color(record.tier()));

                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("●").color(tier_color));

                            let selected = state
                                .ui
                                .popup_record_id
                                .as_deref()
                                .is_some_and(|id| id == record.id);
                            let label = format!("{} ({})", record.name, record.mask_adult);

                            if ui.selectable_label(selected, label).clicked() {
                                let record_id = if record.id.is_empty() {
                                    record.name.clone()
                                } else {
                                    record.id.clone()
                                };
                                events.push(AppIntent::PharmacySelected { record_id });
                            }
                        });
                    }
                },
            );
        });

    events
}

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
