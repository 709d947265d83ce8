//! MaskMap Locator Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod feed;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, FocusMarker, MapPhase, UiState, ViewState,
};
pub use core::{
    cluster_markers, normalize, GeoPoint, MapCamera, MarkerGroup, PharmacyRecord, PharmacySet,
    StockTier,
};
pub use feed::{FeedClient, FeedEvent, FeedTask, PharmacyCollection, PharmacyFeature};
pub use render::{MapScene, TileLayer};
pub use shared::ViewerOptions;
