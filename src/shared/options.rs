//! Zentrale Konfiguration für den MaskMap Locator.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::StockTier;

// ── Feed ────────────────────────────────────────────────────────────

/// Öffentlicher GeoJSON-Feed der Apotheken-Bestände.
pub const FEED_URL: &str =
    "https://raw.githubusercontent.com/kiang/pharmacies/master/json/points.json";

// ── Kartenkacheln ───────────────────────────────────────────────────

/// URL-Template des Kachel-Providers. Platzhalter: {z}, {x}, {y}, {token}.
pub const TILE_URL_TEMPLATE: &str =
    "https://api.mapbox.com/styles/v1/mapbox/streets-v11/tiles/{z}/{x}/{y}?access_token={token}";
/// Environment-Variable für den Zugriffs-Token des Kachel-Providers.
pub const TILE_TOKEN_ENV: &str = "MASKMAP_TILE_TOKEN";

// ── Viewport ────────────────────────────────────────────────────────

/// Fallback-Zentrum, wenn keine Nutzer-Position verfügbar ist (Taipei).
pub const FALLBACK_CENTER: [f64; 2] = [25.0677505, 121.5470599];
/// Zoomstufe beim ersten erfolgreichen Feed-Refresh.
pub const INITIAL_ZOOM: f64 = 14.0;
/// Zoomstufe beim Fokussieren einer ausgewählten Apotheke.
pub const FOCUS_ZOOM: f64 = 16.0;
/// Zoom-Schritt für Menü-Buttons und Shortcuts.
pub const ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Marker ──────────────────────────────────────────────────────────

/// Rasterzellen-Kantenlänge für das Marker-Clustering in Pixeln.
pub const CLUSTER_CELL_PX: f32 = 48.0;
/// Radius einzelner Marker in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 7.0;
/// Radius von Cluster-Badges in Pixeln.
pub const CLUSTER_RADIUS_PX: f32 = 14.0;
/// Pick-Radius für Klick-Selektion in Pixeln.
pub const PICK_RADIUS_PX: f32 = 12.0;

/// Markerfarbe bei Bestand > 100 (RGBA: Grün).
pub const TIER_COLOR_GREEN: [f32; 4] = [0.18, 0.72, 0.31, 1.0];
/// Markerfarbe bei Bestand > 50 (RGBA: Gelb).
pub const TIER_COLOR_YELLOW: [f32; 4] = [0.95, 0.79, 0.15, 1.0];
/// Markerfarbe bei Bestand > 0 (RGBA: Rot).
pub const TIER_COLOR_RED: [f32; 4] = [0.87, 0.23, 0.20, 1.0];
/// Markerfarbe ohne Bestand (RGBA: Grau).
pub const TIER_COLOR_GREY: [f32; 4] = [0.55, 0.55, 0.55, 1.0];
/// Farbe des Fokus-Markers (immer "rot/selektiert", unabhängig vom Bestand).
pub const FOCUS_COLOR: [f32; 4] = [0.87, 0.23, 0.20, 1.0];
/// Füllfarbe von Cluster-Badges (RGBA: Blau).
pub const CLUSTER_COLOR: [f32; 4] = [0.23, 0.49, 0.85, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `mask_map_locator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerOptions {
    // ── Feed & Kacheln ──────────────────────────────────────────
    /// URL des GeoJSON-Feeds
    pub feed_url: String,
    /// URL-Template des Kachel-Providers ({z}/{x}/{y}/{token})
    pub tile_url_template: String,
    /// Zugriffs-Token des Kachel-Providers (leer → Environment-Variable)
    pub tile_access_token: String,

    // ── Viewport ────────────────────────────────────────────────
    /// Feste Start-Position (Latitude, Longitude); None → Environment/Fallback
    pub start_location: Option<[f64; 2]>,
    /// Fallback-Zentrum (Latitude, Longitude)
    pub fallback_center: [f64; 2],
    /// Zoomstufe nach dem ersten Refresh
    pub initial_zoom: f64,
    /// Zoomstufe beim Fokussieren einer Auswahl
    pub focus_zoom: f64,

    // ── Marker ──────────────────────────────────────────────────
    /// Rasterzellen-Kantenlänge fürs Clustering in Pixeln
    pub cluster_cell_px: f32,
    /// Radius einzelner Marker in Pixeln
    pub marker_radius_px: f32,
    /// Radius von Cluster-Badges in Pixeln
    pub cluster_radius_px: f32,
    /// Pick-Radius für Klick-Selektion in Pixeln
    pub pick_radius_px: f32,
    /// Farbe für Bestand > 100
    pub tier_color_green: [f32; 4],
    /// Farbe für Bestand > 50
    pub tier_color_yellow: [f32; 4],
    /// Farbe für Bestand > 0
    pub tier_color_red: [f32; 4],
    /// Farbe ohne Bestand
    pub tier_color_grey: [f32; 4],
    /// Farbe des Fokus-Markers
    pub focus_color: [f32; 4],
    /// Füllfarbe von Cluster-Badges
    pub cluster_color: [f32; 4],
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            feed_url: FEED_URL.to_string(),
            tile_url_template: TILE_URL_TEMPLATE.to_string(),
            tile_access_token: String::new(),
            start_location: None,
            fallback_center: FALLBACK_CENTER,
            initial_zoom: INITIAL_ZOOM,
            focus_zoom: FOCUS_ZOOM,
            cluster_cell_px: CLUSTER_CELL_PX,
            marker_radius_px: MARKER_RADIUS_PX,
            cluster_radius_px: CLUSTER_RADIUS_PX,
            pick_radius_px: PICK_RADIUS_PX,
            tier_color_green: TIER_COLOR_GREEN,
            tier_color_yellow: TIER_COLOR_YELLOW,
            tier_color_red: TIER_COLOR_RED,
            tier_color_grey: TIER_COLOR_GREY,
            focus_color: FOCUS_COLOR,
            cluster_color: CLUSTER_COLOR,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei; bei Fehlern gelten die Defaults.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("mask_map_locator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("mask_map_locator.toml")
    }

    /// Markerfarbe für eine Farbstufe.
    pub fn tier_color(&self, tier: StockTier) -> [f32; 4] {
        match tier {
            StockTier::Green => self.tier_color_green,
            StockTier::Yellow => self.tier_color_yellow,
            StockTier::Red => self.tier_color_red,
            StockTier::Grey => self.tier_color_grey,
        }
    }

    /// Aufgelöster Kachel-Token: Optionen vor Environment-Variable.
    pub fn resolved_tile_token(&self) -> String {
        if !self.tile_access_token.is_empty() {
            return self.tile_access_token.clone();
        }
        std::env::var(TILE_TOKEN_ENV).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_consts() {
        let opts = ViewerOptions::default();
        assert_eq!(opts.feed_url, FEED_URL);
        assert_relative_eq!(opts.fallback_center[0], 25.0677505);
        assert_relative_eq!(opts.initial_zoom, 14.0);
        assert_relative_eq!(opts.focus_zoom, 16.0);
    }

    #[test]
    fn test_toml_roundtrip_preserves_values() {
        let mut opts = ViewerOptions::default();
        opts.tile_access_token = "pk.test".to_string();
        opts.start_location = Some([25.033, 121.565]);
        opts.marker_radius_px = 9.0;

        let toml_text = toml::to_string_pretty(&opts).expect("Serialisierung");
        let back: ViewerOptions = toml::from_str(&toml_text).expect("Deserialisierung");

        assert_eq!(back.tile_access_token, "pk.test");
        assert_eq!(back.start_location, Some([25.033, 121.565]));
        assert_relative_eq!(back.marker_radius_px, 9.0);
    }

    #[test]
    fn test_tier_color_mapping() {
        let opts = ViewerOptions::default();
        assert_eq!(opts.tier_color(StockTier::Green), opts.tier_color_green);
        assert_eq!(opts.tier_color(StockTier::Grey), opts.tier_color_grey);
    }
}
