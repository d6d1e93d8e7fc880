//! Breakout: closes beyond the Bollinger Bands, confirmed by SMA-20.

use crate::config::StrategyThresholds;
use crate::models::signal::{Signal, SignalType};
use crate::signals::scoring::ScoreCard;
use crate::strategies::{Strategy, StrategyContext};

const BAND_BREAKOUT_WEIGHT: f64 = 0.5;
const ABOVE_SMA_WEIGHT: f64 = 0.2;

pub struct BreakoutStrategy {
    threshold: f64,
}

impl BreakoutStrategy {
    pub const NAME: &'static str = "Breakout";

    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for BreakoutStrategy {
    fn default() -> Self {
        Self::new(StrategyThresholds::default().breakout)
    }
}

impl Strategy for BreakoutStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, ctx: &StrategyContext<'_>) -> Option<Signal> {
        let price = ctx.current_price;
        let bands = ctx.indicators.bollinger;
        let mut card = ScoreCard::new();

        let above_upper = bands.is_some_and(|b| price > b.upper);
        let below_lower = bands.is_some_and(|b| price < b.lower);
        card.add_if(
            above_upper,
            BAND_BREAKOUT_WEIGHT,
            "Breakout above upper Bollinger Band",
        );
        card.add_if(
            below_lower,
            BAND_BREAKOUT_WEIGHT,
            "Breakout below lower Bollinger Band",
        );

        if let Some(sma20) = ctx.indicators.sma20 {
            card.add_if(price > sma20, ABOVE_SMA_WEIGHT, "Price above SMA20");
        }

        let signal_type = if above_upper {
            SignalType::Buy
        } else {
            SignalType::Sell
        };
        card.emit(self.threshold, ctx.symbol, Self::NAME, signal_type)
    }
}
