//! MaskMap Locator.
//!
//! Desktop-Kartenviewer für Apotheken mit Masken-Bestand: GeoJSON-Feed,
//! farbklassifizierte Marker mit Clustering, Fokus-Auswahl und Popup.

use mask_map_locator::render::paint_map;
use mask_map_locator::{
    ui, AppController, AppIntent, AppState, FeedTask, MapPhase, MapScene, TileLayer, ViewerOptions,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("MaskMap Locator v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("MaskMap Locator"),
            ..Default::default()
        };

        eframe::run_native(
            "MaskMap Locator",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    feed: FeedTask,
    tiles: TileLayer,
    input: ui::InputState,
}

impl ViewerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        let tiles = TileLayer::from_options(&viewer_options);
        let mut state = AppState::with_options(viewer_options);

        // Erster Refresh startet direkt beim Anlauf
        state.ui.refresh_requested = true;

        Self {
            state,
            controller: AppController::new(),
            feed: FeedTask::new(),
            tiles,
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.poll_feed_events();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.sync_feed_request();
        self.sync_tile_layer();
        let uploaded = self.tiles.drain_results(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events || uploaded > 0);
    }
}

impl ViewerApp {
    /// Sammelt eingetroffene Feed-Ergebnisse als Intents ein.
    fn poll_feed_events(&mut self) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if let Some(event) = self.feed.poll() {
            match event.outcome {
                Ok(records) => events.push(AppIntent::FeedArrived { records }),
                Err(e) => events.push(AppIntent::FeedFailed {
                    message: format!("{e:#}"),
                }),
            }
        }

        events
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_list_panel(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(
                    self.input
                        .collect_viewport_events(ui, &response, viewport_size),
                );

                // Szene als reine Funktion des States bauen und zeichnen
                let scene = MapScene::build(&self.state);
                let painter = ui.painter_at(rect);
                paint_map(
                    &painter,
                    rect,
                    &scene,
                    &mut self.tiles,
                    &self.state.options,
                );

                if self.state.view.phase == MapPhase::Uninitialized {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Waiting for first feed refresh...",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }

                events.extend(ui::show_popup(ctx, scene.popup.as_ref(), rect));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Startet einen neuen Fetch, wenn ein Handler das Request-Flag
    /// gesetzt hat. Ein laufender Fetch wird dadurch überholt.
    fn sync_feed_request(&mut self) {
        if !self.state.ui.refresh_requested {
            return;
        }
        self.state.ui.refresh_requested = false;
        self.state.ui.fetch_in_flight = true;

        let generation = self.feed.request_refresh(&self.state.options.feed_url);
        log::info!("Feed refresh started (generation {})", generation);
    }

    /// Baut den Kachel-Layer neu auf, wenn sich der Provider geändert hat.
    fn sync_tile_layer(&mut self) {
        if !self.state.ui.tiles_dirty {
            return;
        }
        self.state.ui.tiles_dirty = false;

        self.tiles = TileLayer::from_options(&self.state.options);
        log::info!("Tile layer rebuilt for new provider configuration");
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.fetch_in_flight
            || self.state.ui.show_options_dialog
            || self.tiles.pending_count() > 0
        {
            ctx.request_repaint();
        }
    }
}
