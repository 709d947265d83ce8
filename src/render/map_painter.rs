//! Karten-Painter: Kacheln, Marker, Cluster-Badges und Fokus-Ring.
//!
//! Zeichnet ausschließlich über den egui-`Painter`; sämtliche Daten
//! kommen aus der vorab gebauten [`MapScene`](super::MapScene).

use glam::DVec2;

use crate::core::{MapCamera, MarkerGroup, TILE_SIZE};
use crate::shared::ViewerOptions;

use super::scene::MapScene;
use super::tiles::{TileId, TileLayer};

/// Platzhalter-Farbe für noch nicht geladene Kacheln.
const TILE_PLACEHOLDER: egui::Color32 = egui::Color32::from_gray(54);

/// Zeichnet die komplette Kartenansicht in das übergebene Rechteck.
pub fn paint_map(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &MapScene,
    tiles: &mut TileLayer,
    options: &ViewerOptions,
) {
    painter.rect_filled(rect, 0.0, TILE_PLACEHOLDER);

    paint_tiles(painter, rect, scene, tiles);
    paint_markers(painter, rect, scene, options);
    paint_focus(painter, rect, scene, options);
}

fn paint_tiles(painter: &egui::Painter, rect: egui::Rect, scene: &MapScene, tiles: &mut TileLayer) {
    let range = scene.camera.visible_tiles(scene.viewport_size);
    let n = 1i64 << i64::from(range.z);
    let extent = MapCamera::tile_world_extent(range.z);
    let size_px = (TILE_SIZE * (scene.camera.zoom - f64::from(range.z)).exp2()) as f32;

    for y in range.y_min..=range.y_max {
        for x in range.x_min..=range.x_max {
            // Längengrad wrappt, Breitengrad nicht
            let id = TileId {
                z: range.z,
                x: x.rem_euclid(n) as u32,
                y: y as u32,
            };
            tiles.ensure_requested(id);

            let world_origin = DVec2::new(x as f64 * extent, y as f64 * extent);
            let top_left = scene.camera.world_to_screen(world_origin, scene.viewport_size);
            let tile_rect = egui::Rect::from_min_size(
                rect.min + egui::vec2(top_left.x, top_left.y),
                egui::vec2(size_px, size_px),
            );

            if let Some(texture) = tiles.texture(id) {
                painter.image(
                    texture.id(),
                    tile_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
        }
    }
}

fn paint_markers(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &MapScene,
    options: &ViewerOptions,
) {
    for group in &scene.markers {
        match *group {
            MarkerGroup::Single {
                tier, screen_pos, ..
            } => {
                let center = rect.min + egui::vec2(screen_pos.x, screen_pos.y);
                painter.circle(
                    center,
                    options.marker_radius_px,
                    color32(options.tier_color(tier)),
                    egui::Stroke::new(1.5, egui::Color32::WHITE),
                );
            }
            MarkerGroup::Cluster { count, screen_pos } => {
                let center = rect.min + egui::vec2(screen_pos.x, screen_pos.y);
                painter.circle(
                    center,
                    options.cluster_radius_px,
                    color32(options.cluster_color),
                    egui::Stroke::new(1.5, egui::Color32::WHITE),
                );
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    count.to_string(),
                    egui::FontId::proportional(12.0),
                    egui::Color32::WHITE,
                );
            }
        }
    }
}

fn paint_focus(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &MapScene,
    options: &ViewerOptions,
) {
    let Some(focus) = scene.focus_px else {
        return;
    };

    let center = rect.min + egui::vec2(focus.x, focus.y);
    let color = color32(options.focus_color);

    painter.circle_stroke(
        center,
        options.marker_radius_px * 1.8,
        egui::Stroke::new(3.0, color),
    );
    painter.circle_filled(center, 3.0, color);
}

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
