//! Auflösung der Start-Position.
//!
//! Desktop-Ersatz für den Geolocation-Prompt des Browsers: zuerst die
//! feste Position aus den Optionen, dann die Environment-Variablen
//! `MASKMAP_LAT`/`MASKMAP_LNG`, sonst das Fallback-Zentrum. Eine
//! fehlende Position ist kein Fehler.

use crate::core::GeoPoint;
use crate::shared::ViewerOptions;

/// Environment-Variable für den Breitengrad der Start-Position.
pub const LAT_ENV: &str = "MASKMAP_LAT";
/// Environment-Variable für den Längengrad der Start-Position.
pub const LNG_ENV: &str = "MASKMAP_LNG";

/// Löst die Start-Position für die Viewport-Initialisierung auf.
pub fn resolve_start_location(options: &ViewerOptions) -> GeoPoint {
    if let Some([lat, lng]) = options.start_location {
        log::info!("Start-Position aus Optionen: ({}, {})", lat, lng);
        return GeoPoint::new(lat, lng);
    }

    if let Some(point) = location_from_env() {
        log::info!(
            "Start-Position aus Environment: ({}, {})",
            point.lat,
            point.lng
        );
        return point;
    }

    log::info!("Keine Nutzer-Position verfügbar, verwende Fallback-Zentrum");
    GeoPoint::new(options.fallback_center[0], options.fallback_center[1])
}

fn location_from_env() -> Option<GeoPoint> {
    let lat = std::env::var(LAT_ENV).ok()?.trim().parse::<f64>().ok()?;
    let lng = std::env::var(LNG_ENV).ok()?.trim().parse::<f64>().ok()?;
    Some(GeoPoint::new(lat, lng))
}
