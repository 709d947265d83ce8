//! Feed-Handler: Refresh-Anforderung und Übernahme gelieferter Records.

use std::sync::Arc;

use crate::app::{location, AppState, MapPhase};
use crate::core::{PharmacyRecord, PharmacySet};

/// Fordert beim Host einen neuen Feed-Refresh an.
///
/// Der eigentliche Fetch läuft im `FeedTask` des Hosts; hier wird nur
/// das Request-Flag gesetzt (gleicher Mechanismus wie Dialog-Flags).
pub fn request_refresh(state: &mut AppState) {
    state.ui.refresh_requested = true;
}

/// Übernimmt die Records eines erfolgreichen Fetch-Durchlaufs.
///
/// Der Datensatz wird als Ganzes ersetzt, nie gepatcht. Beim allerersten
/// Erfolg wird zusätzlich das Viewport-Zentrum initialisiert
/// (`Uninitialized → Ready`); spätere Refreshes lassen die Kamera in Ruhe.
/// Ein bestehender Fokus-Marker bleibt unverändert und wird erst von der
/// nächsten Auswahl ersetzt.
pub fn apply_records(state: &mut AppState, records: Vec<PharmacyRecord>) {
    let set = PharmacySet::new(records);

    if state.view.phase == MapPhase::Uninitialized {
        let start = location::resolve_start_location(&state.options);
        state.view.camera.look_at(start);
        state.view.camera.set_zoom(state.options.initial_zoom);
        state.view.phase = MapPhase::Ready;
        log::info!(
            "Map initialized at ({:.4}, {:.4}), zoom {}",
            start.lat,
            start.lng,
            state.options.initial_zoom
        );
    }

    log::info!("Feed refresh applied: {} pharmacies with stock", set.len());

    state.pharmacies = Some(Arc::new(set));
    state.ui.status_message = None;
    state.ui.fetch_in_flight = false;
}

/// Meldet einen fehlgeschlagenen Fetch; der Datensatz bleibt im letzten
/// guten Zustand (bzw. leer vor dem ersten Erfolg).
pub fn report_failure(state: &mut AppState, message: &str) {
    log::error!("Feed refresh failed: {}", message);
    state.ui.status_message = Some(format!("Feed-Refresh fehlgeschlagen: {}", message));
    state.ui.fetch_in_flight = false;
}
