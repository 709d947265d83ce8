//! Viewport-Input-Handling: Maus-Events, Pan, Scroll → AppIntent.

use crate::app::handlers::view::scroll_zoom_factor;
use crate::app::AppIntent;

/// Verwaltet den Input-Zustand für das Karten-Viewport.
#[derive(Default)]
pub struct InputState {
    panning: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { panning: false }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus-, Scroll- und
    /// Tastatur-Interaktionen auf der Karte.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        if ui.input(|i| i.key_pressed(egui::Key::F5)) {
            events.push(AppIntent::RefreshRequested);
        }

        self.handle_scroll_zoom(ui, response, &mut events);
        self.handle_pan(ui, response, &mut events);
        self.handle_click(response, &mut events);

        events
    }

    fn handle_scroll_zoom(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let factor = scroll_zoom_factor(scroll > 0.0);
        let focus_px = response
            .hover_pos()
            .map(|pos| to_viewport(pos, response.rect));

        events.push(AppIntent::CameraZoom { factor, focus_px });
    }

    fn handle_pan(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ui.input(|i| i.pointer.delta());
        let dragging = response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Middle);

        if dragging && pointer_delta != egui::Vec2::ZERO {
            self.panning = true;
            // Karte folgt dem Cursor: Kamera wandert entgegengesetzt
            events.push(AppIntent::CameraPan {
                delta_px: glam::Vec2::new(-pointer_delta.x, -pointer_delta.y),
            });
        }

        if response.drag_stopped_by(egui::PointerButton::Primary)
            || response.drag_stopped_by(egui::PointerButton::Middle)
        {
            self.panning = false;
        }
    }

    fn handle_click(&mut self, response: &egui::Response, events: &mut Vec<AppIntent>) {
        if !response.clicked_by(egui::PointerButton::Primary) {
            return;
        }

        if let Some(pointer_pos) = response.interact_pointer_pos() {
            events.push(AppIntent::MapClicked {
                pos_px: to_viewport(pointer_pos, response.rect),
            });
        }
    }
}

/// Screen-Position → Viewport-relative Position.
fn to_viewport(pos: egui::Pos2, rect: egui::Rect) -> glam::Vec2 {
    glam::Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}
