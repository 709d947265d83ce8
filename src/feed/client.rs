//! HTTP-Client für den Apotheken-Feed.
//!
//! Ein einzelner GET gegen eine feste URL, kein Retry, kein Caching,
//! keine Pagination. Fehler wandern mit Kontext zum Aufrufer; die Karte
//! bleibt dann im letzten guten Zustand.

use anyhow::{bail, Context, Result};

use super::schema::{PharmacyCollection, PharmacyFeature};

/// Single-Shot-Client für den GeoJSON-Feed.
pub struct FeedClient {
    http: reqwest::blocking::Client,
    url: String,
}

impl FeedClient {
    /// Erstellt einen Client für die übergebene Feed-URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            url: url.into(),
        }
    }

    /// Gibt die konfigurierte Feed-URL zurück.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Holt und validiert die Feature-Liste des Feeds.
    pub fn fetch_features(&self) -> Result<Vec<PharmacyFeature>> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .with_context(|| format!("Feed nicht erreichbar: {}", self.url))?;

        if !response.status().is_success() {
            bail!("Feed-Server antwortete mit Status {}", response.status());
        }

        let collection: PharmacyCollection = response
            .json()
            .context("GeoJSON-Feed konnte nicht dekodiert werden")?;

        log::info!("Feed delivered {} features", collection.features.len());
        Ok(collection.features)
    }
}
