//! Volatility regime: realized volatility spikes, band squeezes and closes
//! hugging a band.

use crate::config::StrategyThresholds;
use crate::indicators::math;
use crate::models::signal::{Signal, SignalType};
use crate::signals::scoring::ScoreCard;
use crate::strategies::{Strategy, StrategyContext};

const HIGH_VOLATILITY_WEIGHT: f64 = 0.4;
const SQUEEZE_WEIGHT: f64 = 0.3;
const NEAR_BAND_WEIGHT: f64 = 0.2;

const HIGH_VOLATILITY: f64 = 0.03;
const SQUEEZE_WIDTH: f64 = 0.02;
/// Distance to a band, relative to price, that still counts as touching it
const NEAR_BAND_DISTANCE: f64 = 0.01;

pub struct VolatilityStrategy {
    threshold: f64,
    window: usize,
}

impl VolatilityStrategy {
    pub const NAME: &'static str = "Volatility";

    pub fn new(threshold: f64, window: usize) -> Self {
        Self { threshold, window }
    }
}

impl Default for VolatilityStrategy {
    fn default() -> Self {
        let thresholds = StrategyThresholds::default();
        Self::new(thresholds.volatility, thresholds.volatility_window)
    }
}

impl Strategy for VolatilityStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, ctx: &StrategyContext<'_>) -> Option<Signal> {
        let price = ctx.current_price;
        let bands = ctx.indicators.bollinger;
        let volatility = math::volatility(math::trailing(ctx.closes, self.window));
        let mut card = ScoreCard::new();

        card.add_if(
            volatility > HIGH_VOLATILITY,
            HIGH_VOLATILITY_WEIGHT,
            "High volatility detected",
        );

        if let Some(b) = bands {
            let squeezed = b.width_ratio().is_some_and(|w| w < SQUEEZE_WIDTH);
            card.add_if(squeezed, SQUEEZE_WEIGHT, "Bollinger Band squeeze");

            let near_band = price != 0.0
                && ((price - b.upper).abs() / price < NEAR_BAND_DISTANCE
                    || (price - b.lower).abs() / price < NEAR_BAND_DISTANCE);
            card.add_if(near_band, NEAR_BAND_WEIGHT, "Price near support/resistance");
        }

        let signal_type = if bands.is_some_and(|b| price > b.middle) {
            SignalType::Buy
        } else {
            SignalType::Sell
        };
        card.emit(self.threshold, ctx.symbol, Self::NAME, signal_type)
    }
}
