//! Spatial-Index (KD-Tree) für Klick-Picking auf Marker-Positionen.

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Index des Records im aktiven Datensatz
    pub record_index: usize,
    /// Euklidische Distanz in Welteinheiten (Zoom-0-Pixelraum)
    pub distance: f64,
}

/// Read-only Spatial-Index über den projizierten Record-Positionen.
///
/// Wird pro Fetch-Zyklus zusammen mit dem Datensatz neu aufgebaut.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    len: usize,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            len: 0,
        }
    }

    /// Baut einen Index über die übergebenen Weltpositionen.
    /// Der Baum-Eintragsindex entspricht dem Record-Index.
    pub fn from_positions(positions: &[DVec2]) -> Self {
        let entries: Vec<[f64; 2]> = positions.iter().map(|p| [p.x, p.y]).collect();
        let tree: KdTree<f64, 2> = (&entries).into();

        Self {
            tree,
            len: positions.len(),
        }
    }

    /// Gibt die Anzahl indexierter Positionen zurück.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gibt `true` zurück, wenn keine Positionen im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Findet die nächstgelegene Position zur Query.
    pub fn nearest(&self, query: DVec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);

        Some(SpatialMatch {
            record_index: result.item as usize,
            distance: result.distance.sqrt(),
        })
    }

    /// Findet alle Positionen innerhalb eines Radius, nach Distanz sortiert.
    pub fn within_radius(&self, query: DVec2, radius: f64) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .map(|entry| SpatialMatch {
                record_index: entry.item as usize,
                distance: entry.distance.sqrt(),
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_positions() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(4.0, 3.0),
        ]
    }

    #[test]
    fn nearest_returns_expected_index() {
        let index = SpatialIndex::from_positions(&sample_positions());
        let nearest = index
            .nearest(DVec2::new(3.9, 2.9))
            .expect("Treffer erwartet");

        assert_eq!(nearest.record_index, 2);
        assert!(nearest.distance < 0.2);
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let index = SpatialIndex::from_positions(&sample_positions());
        let matches = index.within_radius(DVec2::new(0.0, 0.0), 6.0);

        let indices: Vec<usize> = matches.into_iter().map(|m| m.record_index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(DVec2::new(0.0, 0.0)).is_none());
    }
}
