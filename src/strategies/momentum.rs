//! Trend-following momentum: price stacked above its moving averages,
//! RSI in the bullish band, MACD above its signal line.

use crate::config::StrategyThresholds;
use crate::models::signal::{Signal, SignalType};
use crate::signals::scoring::ScoreCard;
use crate::strategies::{Strategy, StrategyContext};

const SMA_ALIGNMENT_WEIGHT: f64 = 0.3;
const RSI_BULLISH_WEIGHT: f64 = 0.2;
const RSI_OVERSOLD_WEIGHT: f64 = 0.1;
const MACD_BULLISH_WEIGHT: f64 = 0.2;

pub struct MomentumStrategy {
    threshold: f64,
}

impl MomentumStrategy {
    pub const NAME: &'static str = "Momentum";

    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for MomentumStrategy {
    fn default() -> Self {
        Self::new(StrategyThresholds::default().momentum)
    }
}

impl Strategy for MomentumStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, ctx: &StrategyContext<'_>) -> Option<Signal> {
        let price = ctx.current_price;
        let indicators = ctx.indicators;
        let mut card = ScoreCard::new();

        if let (Some(sma20), Some(sma50)) = (indicators.sma20, indicators.sma50) {
            card.add_if(
                price > sma20 && sma20 > sma50,
                SMA_ALIGNMENT_WEIGHT,
                "Price above both SMAs",
            );
        }

        if let Some(rsi) = indicators.rsi {
            if rsi > 50.0 && rsi < 70.0 {
                card.add(RSI_BULLISH_WEIGHT, "RSI in bullish range");
            } else if rsi < 30.0 {
                card.add(RSI_OVERSOLD_WEIGHT, "RSI oversold");
            }
        }

        if let Some(macd) = indicators.macd {
            card.add_if(macd.is_bullish(), MACD_BULLISH_WEIGHT, "MACD bullish crossover");
        }

        // only bullish conditions are modelled
        card.emit(self.threshold, ctx.symbol, Self::NAME, SignalType::Buy)
    }
}
