//! Price series input models

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One bar of a price series. Only `close` is read by the strategies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl PricePoint {
    pub fn new(close: f64) -> Self {
        Self {
            close,
            high: None,
            low: None,
            volume: None,
        }
    }

    pub fn with_range(mut self, high: f64, low: f64) -> Self {
        self.high = Some(high);
        self.low = Some(low);
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

/// Chronological (oldest first) price history of one instrument plus its
/// latest quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentSeries {
    #[serde(default)]
    pub symbol: String,
    pub prices: Vec<PricePoint>,
    pub current_price: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub change_percent: f64,
}

impl InstrumentSeries {
    /// Build a series whose quote is derived from the last two closes
    pub fn new(symbol: impl Into<String>, prices: Vec<PricePoint>) -> Self {
        let last = prices.last().map(|p| p.close).unwrap_or(0.0);
        let prev = if prices.len() >= 2 {
            prices[prices.len() - 2].close
        } else {
            last
        };
        let change = last - prev;
        let change_percent = if prev != 0.0 {
            change / prev * 100.0
        } else {
            0.0
        };

        Self {
            symbol: symbol.into(),
            prices,
            current_price: last,
            change,
            change_percent,
        }
    }

    /// Build a series from bare closing prices
    pub fn from_closes(symbol: impl Into<String>, closes: &[f64]) -> Self {
        Self::new(symbol, closes.iter().copied().map(PricePoint::new).collect())
    }

    /// Override the quote (e.g. with a live tick that is newer than the bars)
    pub fn with_quote(mut self, current_price: f64, change: f64, change_percent: f64) -> Self {
        self.current_price = current_price;
        self.change = change;
        self.change_percent = change_percent;
        self
    }

    pub fn closes(&self) -> Vec<f64> {
        self.prices.iter().map(|p| p.close).collect()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Ordered mapping of symbol to series.
///
/// Iteration follows insertion order, which fixes the order of the signal
/// list an aggregation returns. Serialized as a JSON object keyed by symbol.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketBatch {
    entries: Vec<InstrumentSeries>,
}

impl MarketBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a series under its symbol. An existing entry for the same
    /// symbol is replaced in place and returned.
    pub fn insert(&mut self, series: InstrumentSeries) -> Option<InstrumentSeries> {
        match self.entries.iter_mut().find(|s| s.symbol == series.symbol) {
            Some(existing) => Some(std::mem::replace(existing, series)),
            None => {
                self.entries.push(series);
                None
            }
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&InstrumentSeries> {
        self.entries.iter().find(|s| s.symbol == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstrumentSeries> {
        self.entries.iter()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.entries.iter().map(|s| s.symbol.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<InstrumentSeries> for MarketBatch {
    fn from_iter<I: IntoIterator<Item = InstrumentSeries>>(iter: I) -> Self {
        let mut batch = MarketBatch::new();
        for series in iter {
            batch.insert(series);
        }
        batch
    }
}

impl Serialize for MarketBatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for series in &self.entries {
            map.serialize_entry(&series.symbol, series)?;
        }
        map.end()
    }
}

struct MarketBatchVisitor;

impl<'de> Visitor<'de> for MarketBatchVisitor {
    type Value = MarketBatch;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of symbol to instrument series")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut batch = MarketBatch::new();
        while let Some((symbol, mut series)) = access.next_entry::<String, InstrumentSeries>()? {
            // the map key is authoritative
            series.symbol = symbol;
            batch.insert(series);
        }
        Ok(batch)
    }
}

impl<'de> Deserialize<'de> for MarketBatch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MarketBatchVisitor)
    }
}
