//! Core-Domänentypen: Records, Klassifikation, Kamera, Clustering, Spatial-Index.

pub mod camera;
pub mod classify;
pub mod cluster;
pub mod normalize;
pub mod record;
pub mod spatial;

pub use camera::{mercator_project, mercator_unproject, MapCamera, TileRange, TILE_SIZE};
pub use classify::StockTier;
pub use cluster::{cluster_markers, MarkerGroup};
pub use normalize::normalize;
pub use record::{GeoPoint, PharmacyRecord, PharmacySet};
pub use spatial::{SpatialIndex, SpatialMatch};
