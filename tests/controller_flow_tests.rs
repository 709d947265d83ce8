use approx::assert_relative_eq;
use mask_map_locator::{
    AppController, AppIntent, AppState, GeoPoint, MapPhase, MapScene, PharmacyRecord,
};

fn record(id: &str, lat: f64, lng: f64, adult: i64, child: i64) -> PharmacyRecord {
    PharmacyRecord {
        id: id.to_string(),
        name: format!("Apotheke {}", id),
        address: "台北市".to_string(),
        phone: "0212345678".to_string(),
        note: String::new(),
        mask_adult: adult,
        mask_child: child,
        updated: "2020/02/21 14:42".to_string(),
        position: GeoPoint::new(lat, lng),
    }
}

fn sample_records() -> Vec<PharmacyRecord> {
    vec![
        record("a", 25.0677505, 121.5470599, 120, 30),
        record("b", 25.0710000, 121.5510000, 40, 0),
        record("c", 25.0400000, 121.5300000, 0, 5),
    ]
}

fn deliver_feed(controller: &mut AppController, state: &mut AppState, records: Vec<PharmacyRecord>) {
    controller
        .handle_intent(state, AppIntent::FeedArrived { records })
        .expect("FeedArrived sollte ohne Fehler durchlaufen");
}

#[test]
fn test_first_refresh_initializes_viewport_exactly_once() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];

    assert_eq!(state.view.phase, MapPhase::Uninitialized);

    deliver_feed(&mut controller, &mut state, sample_records());

    assert_eq!(state.view.phase, MapPhase::Ready);
    assert_relative_eq!(state.view.camera.center.lat, state.options.fallback_center[0]);
    assert_relative_eq!(state.view.camera.center.lng, state.options.fallback_center[1]);
    assert_relative_eq!(state.view.camera.zoom, state.options.initial_zoom);

    let last = state
        .command_log
        .entries()
        .last()
        .copied()
        .expect("Es sollte ein Command geloggt sein");
    assert_eq!(last, "ApplyFeedRecords");

    // Nutzer verschiebt die Karte; der zweite Refresh darf das Viewport
    // nicht neu zentrieren.
    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta_px: glam::Vec2::new(300.0, 200.0),
            },
        )
        .expect("Pan sollte durchlaufen");
    let panned_center = state.view.camera.center;

    deliver_feed(&mut controller, &mut state, sample_records());

    assert_eq!(state.view.phase, MapPhase::Ready);
    assert_relative_eq!(state.view.camera.center.lat, panned_center.lat);
    assert_relative_eq!(state.view.camera.center.lng, panned_center.lng);
}

#[test]
fn test_repeated_refresh_is_idempotent_in_marker_count() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];

    deliver_feed(&mut controller, &mut state, sample_records());
    let first = MapScene::build(&state).marker_count();
    let first_records = state.record_count();

    deliver_feed(&mut controller, &mut state, sample_records());
    let second = MapScene::build(&state).marker_count();

    // Alter Datensatz komplett ersetzt: keine Duplikate, kein Leck
    assert_eq!(first, second);
    assert_eq!(state.record_count(), first_records);
    assert!(first > 0);
}

#[test]
fn test_selection_focuses_camera_and_opens_popup() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    deliver_feed(&mut controller, &mut state, sample_records());

    controller
        .handle_intent(
            &mut state,
            AppIntent::PharmacySelected {
                record_id: "b".to_string(),
            },
        )
        .expect("Auswahl sollte durchlaufen");

    let marker = state.focus.marker.as_ref().expect("Fokus-Marker erwartet");
    assert_eq!(marker.record_id, "b");
    assert_relative_eq!(state.view.camera.center.lat, 25.0710000);
    assert_relative_eq!(state.view.camera.center.lng, 121.5510000);
    assert_relative_eq!(state.view.camera.zoom, state.options.focus_zoom);
    assert_eq!(state.ui.popup_record_id.as_deref(), Some("b"));
}

#[test]
fn test_second_selection_replaces_focus_marker() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    deliver_feed(&mut controller, &mut state, sample_records());

    for id in ["a", "b"] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::PharmacySelected {
                    record_id: id.to_string(),
                },
            )
            .expect("Auswahl sollte durchlaufen");
    }

    // Genau ein Fokus-Marker, der der letzten Auswahl gehört
    let marker = state.focus.marker.as_ref().expect("Fokus-Marker erwartet");
    assert_eq!(marker.record_id, "b");

    let scene = MapScene::build(&state);
    assert!(scene.focus_px.is_some());
}

#[test]
fn test_focus_marker_survives_refresh_until_next_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    deliver_feed(&mut controller, &mut state, sample_records());

    controller
        .handle_intent(
            &mut state,
            AppIntent::PharmacySelected {
                record_id: "a".to_string(),
            },
        )
        .expect("Auswahl sollte durchlaufen");

    deliver_feed(&mut controller, &mut state, sample_records());

    let marker = state.focus.marker.as_ref().expect("Fokus-Marker erwartet");
    assert_eq!(marker.record_id, "a");
}

#[test]
fn test_click_on_marker_selects_it() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];

    // Ein Record exakt auf dem Fallback-Zentrum → liegt nach dem ersten
    // Refresh genau in der Viewport-Mitte.
    deliver_feed(
        &mut controller,
        &mut state,
        vec![record("mitte", 25.0677505, 121.5470599, 80, 0)],
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                pos_px: glam::Vec2::new(400.0, 300.0),
            },
        )
        .expect("Klick sollte durchlaufen");

    assert_eq!(state.ui.popup_record_id.as_deref(), Some("mitte"));
    let marker = state.focus.marker.as_ref().expect("Fokus-Marker erwartet");
    assert_eq!(marker.record_id, "mitte");
}

#[test]
fn test_click_into_empty_space_closes_popup_but_keeps_focus() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    deliver_feed(&mut controller, &mut state, sample_records());

    controller
        .handle_intent(
            &mut state,
            AppIntent::PharmacySelected {
                record_id: "a".to_string(),
            },
        )
        .expect("Auswahl sollte durchlaufen");
    assert!(state.ui.popup_record_id.is_some());

    // Viewport-Ecke ist weit von jedem Marker entfernt
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                pos_px: glam::Vec2::new(0.0, 0.0),
            },
        )
        .expect("Klick sollte durchlaufen");

    assert!(state.ui.popup_record_id.is_none());
    assert!(state.focus.marker.is_some());
}

#[test]
fn test_feed_failure_keeps_last_good_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    deliver_feed(&mut controller, &mut state, sample_records());
    let count_before = state.record_count();

    controller
        .handle_intent(
            &mut state,
            AppIntent::FeedFailed {
                message: "Feed nicht erreichbar".to_string(),
            },
        )
        .expect("Fehler-Intent sollte durchlaufen");

    assert_eq!(state.view.phase, MapPhase::Ready);
    assert_eq!(state.record_count(), count_before);
    let message = state.ui.status_message.as_deref().expect("Statusmeldung erwartet");
    assert!(message.contains("nicht erreichbar"));
}

#[test]
fn test_failure_before_first_success_stays_uninitialized() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::FeedFailed {
                message: "DNS-Fehler".to_string(),
            },
        )
        .expect("Fehler-Intent sollte durchlaufen");

    assert_eq!(state.view.phase, MapPhase::Uninitialized);
    assert_eq!(state.record_count(), 0);
}

#[test]
fn test_refresh_request_sets_host_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.ui.refresh_requested);

    controller
        .handle_intent(&mut state, AppIntent::RefreshRequested)
        .expect("RefreshRequested sollte durchlaufen");

    assert!(state.ui.refresh_requested);
    assert_eq!(state.command_log.entries().last().copied(), Some("RequestRefresh"));
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte durchlaufen");

    assert!(state.should_exit);
}

#[test]
fn test_selection_for_unknown_id_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    deliver_feed(&mut controller, &mut state, sample_records());
    let center_before = state.view.camera.center;

    controller
        .handle_intent(
            &mut state,
            AppIntent::PharmacySelected {
                record_id: "gibt-es-nicht".to_string(),
            },
        )
        .expect("Unbekannte Auswahl sollte robust sein");

    assert!(state.focus.marker.is_none());
    assert!(state.ui.popup_record_id.is_none());
    assert_relative_eq!(state.view.camera.center.lat, center_before.lat);
}
