//! Render-Schicht: Szene-Aufbau, Kachel-Layer, egui-Painter.

pub mod map_painter;
pub mod scene;
pub mod tiles;

pub use map_painter::paint_map;
pub use scene::{MapScene, PopupContent};
pub use tiles::{build_tile_url, TileId, TileLayer};
