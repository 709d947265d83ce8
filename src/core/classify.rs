//! Farbklassifikation des Maskenbestands.

/// Farbstufe eines Markers, abgeleitet aus dem Erwachsenen-Bestand.
///
/// Kanonisches Vier-Stufen-Schema; die Schwellen sind strikt "größer als",
/// Grenzwerte fallen also in die jeweils niedrigere Stufe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockTier {
    /// Bestand > 100
    Green,
    /// Bestand > 50
    Yellow,
    /// Bestand > 0
    Red,
    /// Kein Bestand (inklusive negativer oder fehlender Werte)
    Grey,
}

impl StockTier {
    /// Klassifiziert einen Erwachsenen-Bestand.
    ///
    /// Total über alle Eingaben; nicht-numerische Feed-Werte sind an der
    /// Schema-Grenze bereits auf 0 abgebildet.
    pub fn from_adult_count(count: i64) -> Self {
        if count > 100 {
            StockTier::Green
        } else if count > 50 {
            StockTier::Yellow
        } else if count > 0 {
            StockTier::Red
        } else {
            StockTier::Grey
        }
    }
}
