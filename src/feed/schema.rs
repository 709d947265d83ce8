//! Serde-Schema für den GeoJSON-Feed.
//!
//! Explizite Validierung an der Systemgrenze: falsch geformte Geometrie
//! lässt den Fetch als Ganzes mit einer aussagekräftigen Meldung
//! fehlschlagen, statt untypisierte Werte ins Rendering durchzureichen.
//! Bestandsfelder sind dagegen bewusst nachsichtig — der Feed ist nicht
//! sauber typisiert und liefert dort gelegentlich Strings oder null.

use serde::{Deserialize, Deserializer};

/// GeoJSON-FeatureCollection des Apotheken-Feeds.
#[derive(Debug, Clone, Deserialize)]
pub struct PharmacyCollection {
    /// Alle Features in Feed-Reihenfolge
    #[serde(default)]
    pub features: Vec<PharmacyFeature>,
}

/// Einzelnes Feature: Punktgeometrie plus Properties-Bag.
#[derive(Debug, Clone, Deserialize)]
pub struct PharmacyFeature {
    /// Punktgeometrie
    pub geometry: FeatureGeometry,
    /// Attribut-Daten
    pub properties: FeatureProperties,
}

/// Punktgeometrie mit Koordinatenpaar in (Longitude, Latitude)-Reihenfolge.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureGeometry {
    /// Rohes Feed-Paar, Longitude zuerst
    #[serde(deserialize_with = "coordinate_pair")]
    pub coordinates: [f64; 2],
}

/// Attribut-Daten eines Features.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    /// Feed-ID der Apotheke
    #[serde(default)]
    pub id: String,
    /// Anzeigename (Pflichtfeld)
    pub name: String,
    /// Adresse (Pflichtfeld)
    pub address: String,
    /// Telefonnummer (Pflichtfeld, Whitespace noch enthalten)
    pub phone: String,
    /// Freitext-Hinweis
    #[serde(default)]
    pub note: String,
    /// Bestand Erwachsenen-Masken
    #[serde(default, deserialize_with = "lenient_count")]
    pub mask_adult: i64,
    /// Bestand Kinder-Masken
    #[serde(default, deserialize_with = "lenient_count")]
    pub mask_child: i64,
    /// Zeitstempel der letzten Aktualisierung
    #[serde(default)]
    pub updated: String,
}

/// Erzwingt ein exakt zweielementiges Koordinatenpaar.
fn coordinate_pair<'de, D>(deserializer: D) -> Result<[f64; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<f64>::deserialize(deserializer)?;
    if values.len() != 2 {
        return Err(serde::de::Error::invalid_length(
            values.len(),
            &"ein Koordinatenpaar (Longitude, Latitude)",
        ));
    }
    Ok([values[0], values[1]])
}

/// Bildet fehlende, null- oder stringwertige Bestände defensiv auf 0 ab.
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let count = match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        serde_json::Value::String(text) => text.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_collection() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [121.5470599, 25.0677505] },
                "properties": {
                    "id": "5901234567",
                    "name": "大安藥局",
                    "address": "臺北市大安區",
                    "phone": "02 1234 5678",
                    "mask_adult": 80,
                    "mask_child": 20,
                    "updated": "2020/02/21 14:42"
                }
            }]
        }"#;

        let collection: PharmacyCollection =
            serde_json::from_str(json).expect("Feed sollte parsen");
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        assert_eq!(feature.geometry.coordinates, [121.5470599, 25.0677505]);
        assert_eq!(feature.properties.mask_adult, 80);
        assert_eq!(feature.properties.updated, "2020/02/21 14:42");
    }

    #[test]
    fn test_lenient_counts_accept_null_string_and_float() {
        let json = r#"{
            "geometry": { "coordinates": [121.5, 25.0] },
            "properties": {
                "name": "n", "address": "a", "phone": "p",
                "mask_adult": null,
                "mask_child": "15"
            }
        }"#;

        let feature: PharmacyFeature = serde_json::from_str(json).expect("sollte parsen");
        assert_eq!(feature.properties.mask_adult, 0);
        assert_eq!(feature.properties.mask_child, 15);

        let json_float = r#"{
            "geometry": { "coordinates": [121.5, 25.0] },
            "properties": {
                "name": "n", "address": "a", "phone": "p",
                "mask_adult": 42.9
            }
        }"#;
        let feature: PharmacyFeature =
            serde_json::from_str(json_float).expect("sollte parsen");
        assert_eq!(feature.properties.mask_adult, 42);
        // Fehlendes Feld → Default 0
        assert_eq!(feature.properties.mask_child, 0);
    }

    #[test]
    fn test_garbage_count_maps_to_zero() {
        let json = r#"{
            "geometry": { "coordinates": [121.5, 25.0] },
            "properties": {
                "name": "n", "address": "a", "phone": "p",
                "mask_adult": "ausverkauft"
            }
        }"#;

        let feature: PharmacyFeature = serde_json::from_str(json).expect("sollte parsen");
        assert_eq!(feature.properties.mask_adult, 0);
    }

    #[test]
    fn test_wrong_coordinate_arity_fails_fast() {
        let json = r#"{
            "geometry": { "coordinates": [121.5, 25.0, 7.0] },
            "properties": { "name": "n", "address": "a", "phone": "p" }
        }"#;

        let err = serde_json::from_str::<PharmacyFeature>(json)
            .expect_err("Drei Koordinaten dürfen nicht parsen");
        assert!(err.to_string().contains("Koordinatenpaar"));
    }

    #[test]
    fn test_missing_name_fails_fast() {
        let json = r#"{
            "geometry": { "coordinates": [121.5, 25.0] },
            "properties": { "address": "a", "phone": "p" }
        }"#;

        assert!(serde_json::from_str::<PharmacyFeature>(json).is_err());
    }

    #[test]
    fn test_empty_collection_parses() {
        let collection: PharmacyCollection =
            serde_json::from_str(r#"{ "type": "FeatureCollection" }"#).expect("sollte parsen");
        assert!(collection.features.is_empty());
    }
}
