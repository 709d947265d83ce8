//! Detail-Popup der ausgewählten Apotheke.

use crate::app::AppIntent;
use crate::render::PopupContent;

/// Abstand des Popups vom Marker in Pixeln.
const ANCHOR_OFFSET: egui::Vec2 = egui::vec2(16.0, -16.0);

/// Zeigt das Detail-Popup neben dem Fokus-Marker.
pub fn show_popup(
    ctx: &egui::Context,
    popup: Option<&PopupContent>,
    map_rect: egui::Rect,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(content) = popup else {
        return events;
    };

    let anchor = map_rect.min + egui::vec2(content.anchor_px.x, content.anchor_px.y);
    let mut open = true;

    egui::Window::new(&content.name)
        .id(egui::Id::new("pharmacy_popup"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(240.0)
        .current_pos(anchor + ANCHOR_OFFSET)
        .show(ctx, |ui| {
            ui.label(&content.address);
            ui.label(&content.phone);

            ui.separator();

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Adult");
                    ui.heading(content.mask_adult.to_string());
                });
                ui.separator();
                ui.vertical(|ui| {
                    ui.label("Child");
                    ui.heading(content.mask_child.to_string());
                });
            });

            if !content.note.is_empty() {
                ui.separator();
                ui.label(&content.note);
            }

            ui.separator();
            ui.small(format!("Updated: {}", content.updated));
        });

    if !open {
        events.push(AppIntent::PopupCloseRequested);
    }

    events
}
