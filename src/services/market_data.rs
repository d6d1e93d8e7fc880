//! Market data provider interface and the simulated fallback source.

use crate::error::MarketDataError;
use crate::models::market::{InstrumentSeries, MarketBatch, PricePoint};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Price history and latest quote for a symbol
    async fn get_series(&self, symbol: &str) -> Result<InstrumentSeries, MarketDataError>;
}

const DEFAULT_BASE_PRICE: f64 = 1000.0;
const DEFAULT_HISTORY_LEN: usize = 60;
/// Largest single-bar move as a fraction of price
const DEFAULT_MAX_STEP: f64 = 0.01;

/// Random-walk series around a per-symbol base price.
///
/// Used when no brokerage feed is connected. Seeded instances produce the
/// same series for the same symbol on every call.
#[derive(Debug, Clone)]
pub struct SimulatedMarketData {
    history_len: usize,
    max_step: f64,
    seed: Option<u64>,
}

impl SimulatedMarketData {
    pub fn new() -> Self {
        Self {
            history_len: DEFAULT_HISTORY_LEN,
            max_step: DEFAULT_MAX_STEP,
            seed: None,
        }
    }

    pub fn with_history_len(mut self, history_len: usize) -> Self {
        self.history_len = history_len;
        self
    }

    pub fn with_max_step(mut self, max_step: f64) -> Self {
        self.max_step = max_step.abs();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn base_price(symbol: &str) -> f64 {
        match symbol {
            "NIFTY" => 19847.25,
            "BANKNIFTY" => 44568.75,
            "SENSEX" => 66123.45,
            "FINNIFTY" => 20234.50,
            _ => DEFAULT_BASE_PRICE,
        }
    }

    fn rng_for(&self, symbol: &str) -> StdRng {
        match self.seed {
            Some(seed) => {
                let salt = symbol
                    .bytes()
                    .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
                StdRng::seed_from_u64(seed ^ salt)
            }
            None => StdRng::from_entropy(),
        }
    }

    /// Generate a series synchronously
    pub fn generate(&self, symbol: &str) -> Result<InstrumentSeries, MarketDataError> {
        if symbol.trim().is_empty() {
            return Err(MarketDataError::UnknownSymbol(symbol.to_string()));
        }

        let mut rng = self.rng_for(symbol);
        let mut price = Self::base_price(symbol);
        let mut prices = Vec::with_capacity(self.history_len);

        for _ in 0..self.history_len {
            let step = if self.max_step > 0.0 {
                rng.gen_range(-self.max_step..=self.max_step)
            } else {
                0.0
            };
            price = (price * (1.0 + step)).max(0.01);
            let high = price + rng.gen_range(0.0..10.0);
            let low = (price - rng.gen_range(0.0..10.0)).max(0.0);
            let volume = rng.gen_range(1_000..11_000) as f64;
            prices.push(PricePoint::new(price).with_range(high, low).with_volume(volume));
        }

        debug!(symbol, bars = prices.len(), "generated simulated series for {}", symbol);
        Ok(InstrumentSeries::new(symbol, prices))
    }
}

impl Default for SimulatedMarketData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for SimulatedMarketData {
    async fn get_series(&self, symbol: &str) -> Result<InstrumentSeries, MarketDataError> {
        self.generate(symbol)
    }
}

/// Fetch every symbol into a batch, in the given order.
/// Symbols that fail are logged and left out.
pub async fn build_batch(provider: &dyn MarketDataProvider, symbols: &[String]) -> MarketBatch {
    let mut batch = MarketBatch::new();
    for symbol in symbols {
        match provider.get_series(symbol).await {
            Ok(series) => {
                batch.insert(series);
            }
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "skipping {}: market data unavailable", symbol);
            }
        }
    }
    batch
}
