//! Screen-Raster-Clustering der Marker.
//!
//! Marker, deren Screen-Positionen bei der aktuellen Zoomstufe in
//! dieselbe Rasterzelle fallen, verschmelzen zu einem Cluster-Badge mit
//! Mitglieder-Anzahl. Beim Hineinzoomen wandern sie in eigene Zellen und
//! zerfallen wieder in Einzelmarker.

use glam::Vec2;
use indexmap::IndexMap;

use super::{MapCamera, PharmacyRecord, StockTier};

/// Ein Element der Marker-Ebene nach dem Clustering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerGroup {
    /// Einzelner Marker mit Farbstufe
    Single {
        /// Index des Records im aktiven Datensatz
        record_index: usize,
        /// Farbstufe aus dem Erwachsenen-Bestand
        tier: StockTier,
        /// Screen-Position (Viewport-relativ)
        screen_pos: Vec2,
    },
    /// Aggregat mehrerer Marker in einer Rasterzelle
    Cluster {
        /// Anzahl der Mitglieder
        count: usize,
        /// Mittelpunkt der Mitglieder-Positionen
        screen_pos: Vec2,
    },
}

/// Gruppiert Records in Rasterzellen von `cell_px` Kantenlänge.
///
/// Marker außerhalb des Viewports (plus einer Zellbreite Rand) werden
/// verworfen. Deterministisch für gleiche Record-Reihenfolge, Kamera und
/// Viewport-Größe.
pub fn cluster_markers(
    records: &[PharmacyRecord],
    camera: &MapCamera,
    viewport_size: [f32; 2],
    cell_px: f32,
) -> Vec<MarkerGroup> {
    let cell = cell_px.max(1.0);
    let margin = cell;

    let mut cells: IndexMap<(i64, i64), Vec<(usize, Vec2)>> = IndexMap::new();

    for (index, record) in records.iter().enumerate() {
        let screen = camera.geo_to_screen(record.position, viewport_size);
        if screen.x < -margin
            || screen.y < -margin
            || screen.x > viewport_size[0] + margin
            || screen.y > viewport_size[1] + margin
        {
            continue;
        }

        let key = (
            (screen.x / cell).floor() as i64,
            (screen.y / cell).floor() as i64,
        );
        cells.entry(key).or_default().push((index, screen));
    }

    cells
        .into_iter()
        .map(|(_, members)| {
            if members.len() == 1 {
                let (record_index, screen_pos) = members[0];
                MarkerGroup::Single {
                    record_index,
                    tier: records[record_index].tier(),
                    screen_pos,
                }
            } else {
                let sum: Vec2 = members.iter().map(|(_, pos)| *pos).sum();
                MarkerGroup::Cluster {
                    count: members.len(),
                    screen_pos: sum / members.len() as f32,
                }
            }
        })
        .collect()
}
