//! Normalisierung der rohen Feed-Features zu Apotheken-Records.

use crate::feed::PharmacyFeature;

use super::{GeoPoint, PharmacyRecord};

/// Normalisiert rohe Feed-Features zu Records, reihenfolgeerhaltend.
///
/// Pro Feature: Koordinatenpaar genau einmal umkehren (Longitude/Latitude →
/// Latitude/Longitude), Whitespace aus der Telefonnummer entfernen, 臺 in
/// der Adresse durch 台 ersetzen. Anschließend fliegen Records ohne
/// jeglichen Maskenbestand heraus.
///
/// Reine Funktion ohne geteilten Zustand.
pub fn normalize(features: Vec<PharmacyFeature>) -> Vec<PharmacyRecord> {
    features
        .into_iter()
        .map(|feature| {
            let position = GeoPoint::from_feed_pair(feature.geometry.coordinates);
            let props = feature.properties;

            PharmacyRecord {
                id: props.id,
                name: props.name,
                address: modernize_address(&props.address),
                phone: strip_whitespace(&props.phone),
                note: props.note,
                mask_adult: props.mask_adult,
                mask_child: props.mask_child,
                updated: props.updated,
                position,
            }
        })
        .filter(PharmacyRecord::has_stock)
        .collect()
}

/// Entfernt sämtliche Whitespace-Zeichen, auch im Inneren.
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Ersetzt jedes Vorkommen des Langzeichens 臺 durch 台.
fn modernize_address(address: &str) -> String {
    if address.contains('臺') {
        address.replace('臺', "台")
    } else {
        address.to_string()
    }
}
