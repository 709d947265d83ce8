//! Kerndatentypen: Geo-Koordinaten und Apotheken-Records.

use super::spatial::{SpatialIndex, SpatialMatch};
use super::{mercator_project, StockTier};

/// Geografische Koordinate, Breitengrad immer zuerst.
///
/// Der Feed liefert Paare in (Longitude, Latitude)-Reihenfolge; die
/// Umkehrung passiert ausschließlich in [`GeoPoint::from_feed_pair`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen GeoPoint aus (Latitude, Longitude)
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Erstellt einen GeoPoint aus einem rohen Feed-Paar (Longitude zuerst).
    ///
    /// Einziger Umkehr-Punkt im gesamten Code. Ein normalisierter Record
    /// hält nur noch `GeoPoint`, eine doppelte Umkehrung ist damit
    /// strukturell ausgeschlossen.
    pub fn from_feed_pair(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[1],
            lng: pair[0],
        }
    }
}

/// Normalisierter Apotheken-Record eines Fetch-Zyklus.
///
/// Wird pro Zyklus komplett neu aufgebaut und als Ganzes ersetzt,
/// niemals inkrementell gepatcht.
#[derive(Debug, Clone, PartialEq)]
pub struct PharmacyRecord {
    /// Feed-ID der Apotheke
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Adresse (臺 bereits durch 台 ersetzt)
    pub address: String,
    /// Telefonnummer ohne Whitespace
    pub phone: String,
    /// Freitext-Hinweis aus dem Feed
    pub note: String,
    /// Bestand Erwachsenen-Masken
    pub mask_adult: i64,
    /// Bestand Kinder-Masken
    pub mask_child: i64,
    /// Zeitstempel der letzten Feed-Aktualisierung (Rohtext)
    pub updated: String,
    /// Position, Breitengrad zuerst
    pub position: GeoPoint,
}

impl PharmacyRecord {
    /// Gibt `true` zurück, wenn mindestens eine Maskenart vorrätig ist.
    pub fn has_stock(&self) -> bool {
        self.mask_adult > 0 || self.mask_child > 0
    }

    /// Farbstufe des Records (abgeleitet aus dem Erwachsenen-Bestand).
    pub fn tier(&self) -> StockTier {
        StockTier::from_adult_count(self.mask_adult)
    }
}

/// Aktiver Datensatz eines Fetch-Zyklus: Records plus Spatial-Index.
///
/// Der Index liegt in Mercator-Weltkoordinaten (Zoom-0-Pixelraum) und
/// dient dem Klick-Picking im Viewport.
pub struct PharmacySet {
    records: Vec<PharmacyRecord>,
    index: SpatialIndex,
}

impl PharmacySet {
    /// Baut den Datensatz inklusive Spatial-Index auf.
    pub fn new(records: Vec<PharmacyRecord>) -> Self {
        let positions: Vec<glam::DVec2> = records
            .iter()
            .map(|record| mercator_project(record.position))
            .collect();
        let index = SpatialIndex::from_positions(&positions);

        Self { records, index }
    }

    /// Erstellt einen leeren Datensatz.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            index: SpatialIndex::empty(),
        }
    }

    /// Read-only Sicht auf alle Records (Feed-Reihenfolge).
    pub fn records(&self) -> &[PharmacyRecord] {
        &self.records
    }

    /// Gibt die Anzahl der Records zurück.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Gibt `true` zurück, wenn keine Records vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record per Index.
    pub fn get(&self, index: usize) -> Option<&PharmacyRecord> {
        self.records.get(index)
    }

    /// Sucht einen Record per Feed-ID; schlägt die ID fehl, wird der Name verglichen.
    pub fn find(&self, record_id: &str) -> Option<&PharmacyRecord> {
        if record_id.is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.id == record_id)
            .or_else(|| self.records.iter().find(|r| r.name == record_id))
    }

    /// Findet den nächstgelegenen Record zu einer Mercator-Weltposition.
    pub fn nearest(&self, world: glam::DVec2) -> Option<SpatialMatch> {
        self.index.nearest(world)
    }
}
