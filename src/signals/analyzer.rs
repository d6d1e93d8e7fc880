//! Per-instrument analysis: one indicator snapshot, every strategy.

use crate::config::EngineConfig;
use crate::indicators::{IndicatorProvider, StandardIndicators};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::market::InstrumentSeries;
use crate::models::signal::Signal;
use crate::strategies::volume::{self, RelativeVolume, VolumeActivity};
use crate::strategies::{StrategyContext, StrategyRegistry};
use tracing::debug;

pub const MIN_PRICE_POINTS: usize = 50;

const SMA_SHORT_PERIOD: usize = 20;
const SMA_LONG_PERIOD: usize = 50;
const RSI_PERIOD: usize = 14;
const MACD_FAST_PERIOD: usize = 12;
const MACD_SLOW_PERIOD: usize = 26;
const MACD_SIGNAL_PERIOD: usize = 9;
const BOLLINGER_PERIOD: usize = 20;
const BOLLINGER_STD_DEV: f64 = 2.0;

pub struct InstrumentAnalyzer {
    provider: Box<dyn IndicatorProvider>,
    registry: StrategyRegistry,
    volume_activity: Box<dyn VolumeActivity>,
    min_history: usize,
}

impl InstrumentAnalyzer {
    /// Built-in indicators, the five default strategies and relative volume
    pub fn new() -> Self {
        Self {
            provider: Box::new(StandardIndicators),
            registry: StrategyRegistry::default(),
            volume_activity: Box::new(RelativeVolume::default()),
            min_history: MIN_PRICE_POINTS,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            provider: Box::new(StandardIndicators),
            registry: StrategyRegistry::with_thresholds(&config.thresholds),
            volume_activity: volume::from_mode(config.volume_activity),
            min_history: config.thresholds.min_history,
        }
    }

    pub fn with_provider<P: IndicatorProvider + 'static>(mut self, provider: P) -> Self {
        self.provider = Box::new(provider);
        self
    }

    pub fn with_registry(mut self, registry: StrategyRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_volume_activity(mut self, volume_activity: Box<dyn VolumeActivity>) -> Self {
        self.volume_activity = volume_activity;
        self
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn has_enough_history(&self, series: &InstrumentSeries) -> bool {
        series.len() >= self.min_history
    }

    /// Latest value of every indicator over the full closing history
    pub fn snapshot(&self, closes: &[f64]) -> IndicatorSnapshot {
        let p = &self.provider;
        IndicatorSnapshot {
            sma20: p.compute_sma(SMA_SHORT_PERIOD, closes).last().copied(),
            sma50: p.compute_sma(SMA_LONG_PERIOD, closes).last().copied(),
            rsi: p.compute_rsi(RSI_PERIOD, closes).last().copied(),
            macd: p
                .compute_macd(MACD_FAST_PERIOD, MACD_SLOW_PERIOD, MACD_SIGNAL_PERIOD, closes)
                .last()
                .copied(),
            bollinger: p
                .compute_bollinger(BOLLINGER_PERIOD, BOLLINGER_STD_DEV, closes)
                .last()
                .copied(),
        }
    }

    /// Run every registered strategy against one instrument.
    /// Short histories yield no signals.
    pub fn analyze(&self, series: &InstrumentSeries) -> Vec<Signal> {
        if !self.has_enough_history(series) {
            debug!(
                symbol = %series.symbol,
                count = series.len(),
                min = self.min_history,
                "not enough price points ({} < {}) for {}",
                series.len(),
                self.min_history,
                series.symbol
            );
            return Vec::new();
        }

        let closes = series.closes();
        let snapshot = self.snapshot(&closes);
        let high_volume = self.volume_activity.is_elevated(series);

        let ctx = StrategyContext::new(&series.symbol, series.current_price, &snapshot)
            .with_change(series.change, series.change_percent)
            .with_closes(&closes)
            .with_high_volume(high_volume);

        let signals = self.registry.evaluate_all(&ctx);
        debug!(
            symbol = %series.symbol,
            signal_count = signals.len(),
            high_volume,
            "analyzed {}",
            series.symbol
        );
        signals
    }
}

impl Default for InstrumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
