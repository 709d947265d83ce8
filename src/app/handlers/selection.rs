//! Selektions-Handler: Fokus-Marker, Popup und Klick-Picking.

use crate::app::state::FocusMarker;
use crate::app::AppState;

/// Fokussiert eine Apotheke: Kamera auf Fokus-Zoom zentrieren, offenes
/// Popup schließen, Fokus-Marker ersetzen, Detail-Popup öffnen.
///
/// Es existiert immer höchstens ein Fokus-Marker; die neue Auswahl
/// ersetzt die alte vollständig.
pub fn select_pharmacy(state: &mut AppState, record_id: &str) {
    let Some(position) = state.find_record(record_id).map(|r| r.position) else {
        log::warn!("Selection for unknown record id: {}", record_id);
        return;
    };

    state.view.camera.look_at(position);
    state.view.camera.set_zoom(state.options.focus_zoom);

    // Erst offenes Popup schließen, dann die neue Auswahl öffnen
    state.ui.popup_record_id = None;
    state.focus.marker = Some(FocusMarker {
        record_id: record_id.to_string(),
        position,
    });
    state.ui.popup_record_id = Some(record_id.to_string());
}

/// Wählt den nächstgelegenen Marker zur Klickposition aus.
/// Klick ins Leere schließt nur das Popup; der Fokus-Marker bleibt.
pub fn pick_marker_at(state: &mut AppState, pos_px: glam::Vec2) {
    let Some(set) = state.pharmacies.clone() else {
        return;
    };

    let world = state
        .view
        .camera
        .screen_to_world(pos_px, state.view.viewport_size);
    let pick_radius_world = f64::from(state.options.pick_radius_px) / state.view.camera.scale();

    let picked = set
        .nearest(world)
        .filter(|hit| hit.distance <= pick_radius_world)
        .and_then(|hit| set.get(hit.record_index))
        .map(|record| {
            if record.id.is_empty() {
                record.name.clone()
            } else {
                record.id.clone()
            }
        });

    match picked {
        Some(record_id) => select_pharmacy(state, &record_id),
        None => state.ui.popup_record_id = None,
    }
}

/// Schließt das Detail-Popup.
pub fn close_popup(state: &mut AppState) {
    state.ui.popup_record_id = None;
}
