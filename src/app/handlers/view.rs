//! View-Handler: Kamera und Viewport.

use crate::app::{location, AppState};
use crate::shared::options::{SCROLL_ZOOM_STEP, ZOOM_STEP};

/// Verschiebt die Kamera um ein Screen-Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: glam::Vec2) {
    state.view.camera.pan_screen(delta_px);
}

/// Zoomt die Kamera, optional auf einen Fokuspunkt im Viewport.
pub fn zoom(state: &mut AppState, factor: f64, focus_px: Option<glam::Vec2>) {
    match focus_px {
        Some(focus) => {
            state
                .view
                .camera
                .zoom_towards(factor, focus, state.view.viewport_size)
        }
        None => state.view.camera.zoom_by(factor),
    }
}

/// Stufenweise hineinzoomen (Menü/Shortcut).
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by(ZOOM_STEP);
}

/// Stufenweise herauszoomen (Menü/Shortcut).
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by(1.0 / ZOOM_STEP);
}

/// Setzt die aktuelle Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Setzt die Ansicht auf Start-Position und Anfangszoom zurück.
pub fn reset_view(state: &mut AppState) {
    let start = location::resolve_start_location(&state.options);
    state.view.camera.look_at(start);
    state.view.camera.set_zoom(state.options.initial_zoom);
}

/// Scroll-Zoom-Faktor für eine Scroll-Richtung.
pub fn scroll_zoom_factor(scroll_up: bool) -> f64 {
    if scroll_up {
        SCROLL_ZOOM_STEP
    } else {
        1.0 / SCROLL_ZOOM_STEP
    }
}
