//! Web-Mercator-Kamera für Pan, Zoom und Kachel-Mathematik.
//!
//! Weltkoordinaten sind Mercator-normalisiert auf den Zoom-0-Pixelraum
//! (eine Kachel von 256×256 Einheiten deckt die ganze Welt ab). Der
//! Screen-Maßstab ist `2^zoom` Pixel pro Welteinheit.

use glam::{DVec2, Vec2};

use super::GeoPoint;

/// Kantenlänge einer Kachel in Pixeln (und damit des Zoom-0-Weltraums).
pub const TILE_SIZE: f64 = 256.0;

/// Mercator-Grenzbreite; darüber/darunter ist die Projektion undefiniert.
const MAX_LATITUDE: f64 = 85.05112878;

/// Projiziert eine Geo-Koordinate in den Zoom-0-Pixelraum.
pub fn mercator_project(point: GeoPoint) -> DVec2 {
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.lng + 180.0) / 360.0 * TILE_SIZE;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * TILE_SIZE;
    DVec2::new(x, y)
}

/// Inverse Projektion aus dem Zoom-0-Pixelraum.
pub fn mercator_unproject(world: DVec2) -> GeoPoint {
    let lng = world.x / TILE_SIZE * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * world.y / TILE_SIZE);
    let lat = n.sinh().atan().to_degrees();
    GeoPoint::new(lat, lng)
}

/// Sichtbarer Kachelbereich eines Viewports bei einem festen Zoom-Level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRange {
    /// Kachel-Zoomstufe
    pub z: u8,
    /// Westlichste Kachelspalte (kann negativ sein, Wrap beim Zeichnen)
    pub x_min: i64,
    /// Östlichste Kachelspalte (inklusiv)
    pub x_max: i64,
    /// Nördlichste Kachelzeile (geklemmt)
    pub y_min: i64,
    /// Südlichste Kachelzeile (inklusiv, geklemmt)
    pub y_max: i64,
}

impl TileRange {
    /// Anzahl der Kacheln im Bereich.
    pub fn len(&self) -> usize {
        let cols = (self.x_max - self.x_min + 1).max(0) as usize;
        let rows = (self.y_max - self.y_min + 1).max(0) as usize;
        cols * rows
    }

    /// Gibt `true` zurück, wenn der Bereich leer ist.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Slippy-Map-Kamera mit geografischem Zentrum und fraktionalem Zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    /// Kartenzentrum
    pub center: GeoPoint,
    /// Zoomstufe (Zweierlogarithmus des Maßstabs)
    pub zoom: f64,
}

impl MapCamera {
    /// Minimale Zoomstufe.
    pub const ZOOM_MIN: f64 = 3.0;
    /// Maximale Zoomstufe.
    pub const ZOOM_MAX: f64 = 18.0;
    /// Höchste Zoomstufe, für die Kacheln angefragt werden.
    /// Darüber werden vorhandene Kacheln hochskaliert gezeichnet.
    pub const TILE_NATIVE_Z_MAX: u8 = 16;

    /// Erstellt eine Kamera über Zentrum und Zoom (geklemmt).
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Zentriert die Kamera auf einen Punkt.
    pub fn look_at(&mut self, target: GeoPoint) {
        self.center = target;
    }

    /// Setzt die Zoomstufe (geklemmt).
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Screen-Pixel pro Welteinheit.
    pub fn scale(&self) -> f64 {
        self.zoom.exp2()
    }

    /// Multipliziert den Maßstab um `factor` (geklemmt).
    pub fn zoom_by(&mut self, factor: f64) {
        if factor > 0.0 {
            self.set_zoom(self.zoom + factor.log2());
        }
    }

    /// Zoomt um `factor` und hält dabei den Punkt unter `focus_px` fest.
    pub fn zoom_towards(&mut self, factor: f64, focus_px: Vec2, viewport_size: [f32; 2]) {
        let anchor_world = self.screen_to_world(focus_px, viewport_size);
        self.zoom_by(factor);

        // Zentrum so verschieben, dass der Ankerpunkt wieder unter dem Cursor liegt
        let half = DVec2::new(
            f64::from(viewport_size[0]) / 2.0,
            f64::from(viewport_size[1]) / 2.0,
        );
        let focus = DVec2::new(f64::from(focus_px.x), f64::from(focus_px.y));
        let center_world = anchor_world - (focus - half) / self.scale();
        self.center = mercator_unproject(center_world);
    }

    /// Verschiebt das Zentrum um ein Screen-Pixel-Delta.
    pub fn pan_screen(&mut self, delta_px: Vec2) {
        let delta_world = DVec2::new(f64::from(delta_px.x), f64::from(delta_px.y)) / self.scale();
        let center_world = mercator_project(self.center) + delta_world;
        self.center = mercator_unproject(center_world);
    }

    /// Weltposition → Screen-Position (Viewport-relativ, Ursprung oben links).
    pub fn world_to_screen(&self, world: DVec2, viewport_size: [f32; 2]) -> Vec2 {
        let center_world = mercator_project(self.center);
        let half = DVec2::new(
            f64::from(viewport_size[0]) / 2.0,
            f64::from(viewport_size[1]) / 2.0,
        );
        let screen = (world - center_world) * self.scale() + half;
        Vec2::new(screen.x as f32, screen.y as f32)
    }

    /// Screen-Position → Weltposition.
    pub fn screen_to_world(&self, screen_px: Vec2, viewport_size: [f32; 2]) -> DVec2 {
        let center_world = mercator_project(self.center);
        let half = DVec2::new(
            f64::from(viewport_size[0]) / 2.0,
            f64::from(viewport_size[1]) / 2.0,
        );
        let screen = DVec2::new(f64::from(screen_px.x), f64::from(screen_px.y));
        (screen - half) / self.scale() + center_world
    }

    /// Geo-Koordinate → Screen-Position.
    pub fn geo_to_screen(&self, point: GeoPoint, viewport_size: [f32; 2]) -> Vec2 {
        self.world_to_screen(mercator_project(point), viewport_size)
    }

    /// Screen-Position → Geo-Koordinate.
    pub fn screen_to_geo(&self, screen_px: Vec2, viewport_size: [f32; 2]) -> GeoPoint {
        mercator_unproject(self.screen_to_world(screen_px, viewport_size))
    }

    /// Kachel-Zoomstufe für den aktuellen fraktionalen Zoom.
    pub fn tile_zoom(&self) -> u8 {
        (self.zoom.round().max(0.0) as u8).min(Self::TILE_NATIVE_Z_MAX)
    }

    /// Weltausdehnung einer Kachel bei Zoomstufe `z`.
    pub fn tile_world_extent(z: u8) -> f64 {
        TILE_SIZE / f64::from(1u32 << u32::from(z.min(31)))
    }

    /// Berechnet den sichtbaren Kachelbereich für den Viewport.
    pub fn visible_tiles(&self, viewport_size: [f32; 2]) -> TileRange {
        let z = self.tile_zoom();
        let extent = Self::tile_world_extent(z);
        let n = 1i64 << i64::from(z);

        let top_left = self.screen_to_world(Vec2::ZERO, viewport_size);
        let bottom_right =
            self.screen_to_world(Vec2::new(viewport_size[0], viewport_size[1]), viewport_size);

        let x_min = (top_left.x / extent).floor() as i64;
        let x_max = (bottom_right.x / extent).floor() as i64;
        // Zeilen außerhalb des Mercator-Bereichs gibt es nicht
        let y_min = ((top_left.y / extent).floor() as i64).clamp(0, n - 1);
        let y_max = ((bottom_right.y / extent).floor() as i64).clamp(0, n - 1);

        TileRange {
            z,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_null_island_projects_to_world_center() {
        let world = mercator_project(GeoPoint::new(0.0, 0.0));
        assert_relative_eq!(world.x, TILE_SIZE / 2.0, epsilon = 1e-9);
        assert_relative_eq!(world.y, TILE_SIZE / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_project_unproject_roundtrip() {
        let point = GeoPoint::new(25.0677505, 121.5470599);
        let back = mercator_unproject(mercator_project(point));
        assert_relative_eq!(back.lat, point.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lng, point.lng, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = MapCamera::new(GeoPoint::new(25.0, 121.5), 14.0);
        camera.set_zoom(99.0);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MAX);
        camera.set_zoom(-4.0);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MIN);
    }

    #[test]
    fn test_viewport_center_maps_to_camera_center() {
        let camera = MapCamera::new(GeoPoint::new(25.0677505, 121.5470599), 14.0);
        let viewport = [800.0, 600.0];

        let geo = camera.screen_to_geo(Vec2::new(400.0, 300.0), viewport);
        assert_relative_eq!(geo.lat, camera.center.lat, epsilon = 1e-6);
        assert_relative_eq!(geo.lng, camera.center.lng, epsilon = 1e-6);
    }

    #[test]
    fn test_screen_world_roundtrip() {
        let camera = MapCamera::new(GeoPoint::new(25.0, 121.5), 12.0);
        let viewport = [800.0, 600.0];
        let screen = Vec2::new(123.0, 456.0);

        let back = camera.world_to_screen(camera.screen_to_world(screen, viewport), viewport);
        assert_relative_eq!(back.x, screen.x, epsilon = 1e-2);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-2);
    }

    #[test]
    fn test_zoom_towards_keeps_anchor_fixed() {
        let mut camera = MapCamera::new(GeoPoint::new(25.0, 121.5), 12.0);
        let viewport = [800.0, 600.0];
        let focus = Vec2::new(200.0, 150.0);

        let anchor_before = camera.screen_to_geo(focus, viewport);
        camera.zoom_towards(2.0, focus, viewport);
        let anchor_after = camera.screen_to_geo(focus, viewport);

        assert_relative_eq!(anchor_after.lat, anchor_before.lat, epsilon = 1e-6);
        assert_relative_eq!(anchor_after.lng, anchor_before.lng, epsilon = 1e-6);
    }

    #[test]
    fn test_pan_moves_center_east_and_south() {
        let mut camera = MapCamera::new(GeoPoint::new(25.0, 121.5), 12.0);
        camera.pan_screen(Vec2::new(100.0, 100.0));

        assert!(camera.center.lng > 121.5);
        assert!(camera.center.lat < 25.0);
    }

    #[test]
    fn test_visible_tiles_cover_viewport() {
        let camera = MapCamera::new(GeoPoint::new(25.0677505, 121.5470599), 14.0);
        let range = camera.visible_tiles([1024.0, 768.0]);

        assert_eq!(range.z, 14);
        // 1024 px Breite / 256 px pro Kachel = 4 Spalten, plus Anschnitt
        assert!(range.x_max - range.x_min >= 4);
        assert!(range.y_max - range.y_min >= 3);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_tile_zoom_is_capped_at_native_max() {
        let camera = MapCamera::new(GeoPoint::new(25.0, 121.5), 18.0);
        assert_eq!(camera.tile_zoom(), MapCamera::TILE_NATIVE_Z_MAX);
    }
}
