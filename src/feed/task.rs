//! Hintergrund-Fetch mit Generationszähler.
//!
//! Jeder Refresh läuft auf einem eigenen Worker-Thread und trägt eine
//! fortlaufende Generation. Ein neuerer Refresh macht alle laufenden
//! obsolet: deren Ergebnisse werden an der Poll-Grenze verworfen und
//! erreichen den Anwendungszustand nie. Der unterliegende Socket wird
//! nicht abgebrochen; der überholte Worker läuft leer.

use std::sync::mpsc;

use anyhow::Result;

use crate::core::{normalize, PharmacyRecord};

use super::FeedClient;

/// Ergebnis eines abgeschlossenen Fetch-Durchlaufs.
pub struct FeedEvent {
    /// Generation des auslösenden Refreshs
    pub generation: u64,
    /// Normalisierte Records oder Fehler
    pub outcome: Result<Vec<PharmacyRecord>>,
}

/// Verwaltet Refresh-Worker und liefert nur das jeweils neueste Ergebnis.
pub struct FeedTask {
    tx: mpsc::Sender<FeedEvent>,
    rx: mpsc::Receiver<FeedEvent>,
    generation: u64,
    in_flight: bool,
}

impl FeedTask {
    /// Erstellt einen Task ohne laufende Worker.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            generation: 0,
            in_flight: false,
        }
    }

    /// Startet einen Fetch gegen die Feed-URL; Normalisierung läuft mit
    /// auf dem Worker-Thread.
    pub fn request_refresh(&mut self, feed_url: &str) -> u64 {
        let url = feed_url.to_string();
        self.request_refresh_with(move || {
            let client = FeedClient::new(url);
            client.fetch_features().map(normalize)
        })
    }

    /// Startet einen Fetch mit beliebiger Quelle (Test-Einstieg).
    pub fn request_refresh_with<F>(&mut self, fetch: F) -> u64
    where
        F: FnOnce() -> Result<Vec<PharmacyRecord>> + Send + 'static,
    {
        self.generation += 1;
        self.in_flight = true;

        let generation = self.generation;
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            let outcome = fetch();
            // Send-Fehler heißt: Anwendung wurde beendet
            let _ = tx.send(FeedEvent {
                generation,
                outcome,
            });
        });

        generation
    }

    /// Holt das neueste gültige Ergebnis ab; überholte Generationen
    /// werden still verworfen.
    pub fn poll(&mut self) -> Option<FeedEvent> {
        let mut latest = None;

        while let Ok(event) = self.rx.try_recv() {
            if event.generation == self.generation {
                self.in_flight = false;
                latest = Some(event);
            } else {
                log::debug!(
                    "Discarding superseded feed result (generation {} < {})",
                    event.generation,
                    self.generation
                );
            }
        }

        latest
    }

    /// Gibt `true` zurück, solange die aktuelle Generation noch aussteht.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Aktuelle (zuletzt vergebene) Generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for FeedTask {
    fn default() -> Self {
        Self::new()
    }
}
