//! Kachel-Layer: Hintergrund-Fetch, Dekodierung und Textur-Cache.
//!
//! Ein langlebiger Worker-Thread holt und dekodiert angefragte Kacheln;
//! die fertigen RGBA-Puffer kommen über einen Channel zurück und werden
//! auf dem UI-Thread als egui-Texturen hochgeladen. Fehlgeschlagene
//! Kacheln werden nicht erneut versucht (gleiche No-Retry-Haltung wie
//! beim Feed).

use std::sync::mpsc;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;

use crate::shared::ViewerOptions;

/// Obergrenze des Kachel-Caches; darüber fliegen die ältesten Einträge.
const MAX_CACHED_TILES: usize = 512;

/// Adresse einer Slippy-Kachel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    /// Zoomstufe
    pub z: u8,
    /// Spalte (bereits auf den gültigen Bereich gewrappt)
    pub x: u32,
    /// Zeile
    pub y: u32,
}

/// Dekodierte Kachel vom Worker-Thread.
struct DecodedTile {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

struct TileResult {
    id: TileId,
    outcome: Result<DecodedTile>,
}

/// Zustand einer Kachel im Cache.
enum TileSlot {
    /// Angefragt, Ergebnis steht aus
    Pending,
    /// Fetch oder Dekodierung fehlgeschlagen (kein Retry)
    Failed,
    /// Textur liegt auf der GPU
    Ready(egui::TextureHandle),
}

/// Kachel-Cache mit Hintergrund-Fetcher.
pub struct TileLayer {
    request_tx: mpsc::Sender<TileId>,
    result_rx: mpsc::Receiver<TileResult>,
    slots: IndexMap<TileId, TileSlot>,
}

impl TileLayer {
    /// Erstellt den Layer und startet den Worker-Thread.
    pub fn new(url_template: &str, access_token: &str) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<TileId>();
        let (result_tx, result_rx) = mpsc::channel::<TileResult>();

        let template = url_template.to_string();
        let token = access_token.to_string();
        std::thread::spawn(move || tile_worker(request_rx, result_tx, template, token));

        Self {
            request_tx,
            result_rx,
            slots: IndexMap::new(),
        }
    }

    /// Erstellt den Layer aus den Viewer-Optionen (Token aufgelöst).
    pub fn from_options(options: &ViewerOptions) -> Self {
        Self::new(&options.tile_url_template, &options.resolved_tile_token())
    }

    /// Fragt eine Kachel an, falls noch nicht bekannt.
    pub fn ensure_requested(&mut self, id: TileId) {
        if self.slots.contains_key(&id) {
            return;
        }

        // Send-Fehler heißt: Worker ist weg, Kachel bleibt Platzhalter
        if self.request_tx.send(id).is_ok() {
            self.slots.insert(id, TileSlot::Pending);
        }
        self.evict_over_cap();
    }

    /// Gibt die Textur einer fertigen Kachel zurück.
    pub fn texture(&self, id: TileId) -> Option<&egui::TextureHandle> {
        match self.slots.get(&id) {
            Some(TileSlot::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Lädt eingetroffene Kacheln als Texturen hoch.
    /// Gibt die Anzahl neu hochgeladener Kacheln zurück.
    pub fn drain_results(&mut self, ctx: &egui::Context) -> usize {
        let mut uploaded = 0;

        while let Ok(result) = self.result_rx.try_recv() {
            match result.outcome {
                Ok(tile) => {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [tile.width as usize, tile.height as usize],
                        &tile.rgba,
                    );
                    let handle = ctx.load_texture(
                        format!("tile-{}-{}-{}", result.id.z, result.id.x, result.id.y),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.slots.insert(result.id, TileSlot::Ready(handle));
                    uploaded += 1;
                }
                Err(e) => {
                    log::warn!(
                        "Tile {}/{}/{} failed: {:#}",
                        result.id.z,
                        result.id.x,
                        result.id.y,
                        e
                    );
                    self.slots.insert(result.id, TileSlot::Failed);
                }
            }
        }

        uploaded
    }

    /// Anzahl angefragter, noch ausstehender Kacheln.
    pub fn pending_count(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| matches!(slot, TileSlot::Pending))
            .count()
    }

    fn evict_over_cap(&mut self) {
        while self.slots.len() > MAX_CACHED_TILES {
            self.slots.shift_remove_index(0);
        }
    }
}

/// Worker-Schleife: Kacheln holen, dekodieren, zurücksenden.
fn tile_worker(
    request_rx: mpsc::Receiver<TileId>,
    result_tx: mpsc::Sender<TileResult>,
    template: String,
    token: String,
) {
    let client = reqwest::blocking::Client::new();

    while let Ok(id) = request_rx.recv() {
        let outcome = fetch_tile(&client, &template, &token, id);
        if result_tx.send(TileResult { id, outcome }).is_err() {
            // Layer wurde verworfen
            break;
        }
    }
}

fn fetch_tile(
    client: &reqwest::blocking::Client,
    template: &str,
    token: &str,
    id: TileId,
) -> Result<DecodedTile> {
    let url = build_tile_url(template, token, id);

    let response = client
        .get(&url)
        .send()
        .with_context(|| format!("Kachel nicht erreichbar: {}", url))?;
    if !response.status().is_success() {
        bail!("Kachel-Server antwortete mit Status {}", response.status());
    }

    let bytes = response
        .bytes()
        .context("Kachel-Antwort konnte nicht gelesen werden")?;
    let image =
        image::load_from_memory(&bytes).context("Kachel konnte nicht dekodiert werden")?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedTile {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Interpoliert das Provider-Template mit Kachel-Adresse und Token.
///
/// Unterstützte Platzhalter: {z}, {x}, {y}, {token}, {s} (Subdomain),
/// {r} (Retina-Suffix, bleibt leer).
pub fn build_tile_url(template: &str, token: &str, id: TileId) -> String {
    let mut url = template.to_string();
    let values = [
        ("z", id.z.to_string()),
        ("x", id.x.to_string()),
        ("y", id.y.to_string()),
        ("token", token.to_string()),
        ("s", "a".to_string()),
        ("r", String::new()),
    ];

    for (key, value) in values {
        url = url.replace(&format!("{{{key}}}"), &value);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapbox_template_interpolation() {
        let url = build_tile_url(
            "https://api.mapbox.com/styles/v1/mapbox/streets-v11/tiles/{z}/{x}/{y}?access_token={token}",
            "pk.test",
            TileId {
                z: 14,
                x: 13713,
                y: 7009,
            },
        );

        assert_eq!(
            url,
            "https://api.mapbox.com/styles/v1/mapbox/streets-v11/tiles/14/13713/7009?access_token=pk.test"
        );
    }

    #[test]
    fn test_subdomain_and_retina_placeholders() {
        let url = build_tile_url(
            "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
            "",
            TileId { z: 3, x: 6, y: 3 },
        );

        assert_eq!(url, "https://a.basemaps.cartocdn.com/light_all/3/6/3.png");
    }
}
