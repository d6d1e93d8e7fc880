//! Mean reversion: fade RSI extremes and closes outside the Bollinger Bands.

use crate::config::StrategyThresholds;
use crate::models::signal::{Signal, SignalType};
use crate::signals::scoring::ScoreCard;
use crate::strategies::{Strategy, StrategyContext};

const RSI_EXTREME_WEIGHT: f64 = 0.4;
const BAND_EXCURSION_WEIGHT: f64 = 0.3;

pub struct MeanReversionStrategy {
    threshold: f64,
}

impl MeanReversionStrategy {
    pub const NAME: &'static str = "Mean Reversion";

    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for MeanReversionStrategy {
    fn default() -> Self {
        Self::new(StrategyThresholds::default().mean_reversion)
    }
}

impl Strategy for MeanReversionStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, ctx: &StrategyContext<'_>) -> Option<Signal> {
        let price = ctx.current_price;
        let rsi = ctx.indicators.rsi;
        let bands = ctx.indicators.bollinger;
        let mut card = ScoreCard::new();

        let oversold = rsi.is_some_and(|v| v < 30.0);
        let overbought = rsi.is_some_and(|v| v > 70.0);
        if oversold {
            card.add(RSI_EXTREME_WEIGHT, "RSI oversold");
        } else if overbought {
            card.add(RSI_EXTREME_WEIGHT, "RSI overbought");
        }

        let below_lower = bands.is_some_and(|b| price < b.lower);
        let above_upper = bands.is_some_and(|b| price > b.upper);
        if below_lower {
            card.add(BAND_EXCURSION_WEIGHT, "Price below lower Bollinger Band");
        } else if above_upper {
            card.add(BAND_EXCURSION_WEIGHT, "Price above upper Bollinger Band");
        }

        let signal_type = if oversold || below_lower {
            SignalType::Buy
        } else {
            SignalType::Sell
        };
        card.emit(self.threshold, ctx.symbol, Self::NAME, signal_type)
    }
}
