//! Short-horizon momentum over the last few bars ("Screen Time").

use crate::config::StrategyThresholds;
use crate::indicators::math;
use crate::models::signal::{Signal, SignalType};
use crate::signals::scoring::ScoreCard;
use crate::strategies::{Strategy, StrategyContext};

const STRONG_MOMENTUM_WEIGHT: f64 = 0.4;
const VOLATILE_TREND_WEIGHT: f64 = 0.3;
const HIGH_VOLUME_WEIGHT: f64 = 0.2;

const MIN_CHANGE_PERCENT: f64 = 1.0;
const STRONG_TREND: f64 = 0.5;
const MIN_VOLATILITY: f64 = 0.02;
const MIN_ABS_TREND: f64 = 0.3;

pub struct ScreenTimeStrategy {
    threshold: f64,
    trend_window: usize,
    volatility_window: usize,
}

impl ScreenTimeStrategy {
    pub const NAME: &'static str = "Screen Time";

    pub fn new(threshold: f64, trend_window: usize, volatility_window: usize) -> Self {
        Self {
            threshold,
            trend_window,
            volatility_window,
        }
    }

    pub fn from_thresholds(thresholds: &StrategyThresholds) -> Self {
        Self::new(
            thresholds.screen_time,
            thresholds.trend_window,
            thresholds.volatility_window,
        )
    }
}

impl Default for ScreenTimeStrategy {
    fn default() -> Self {
        Self::from_thresholds(&StrategyThresholds::default())
    }
}

impl Strategy for ScreenTimeStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, ctx: &StrategyContext<'_>) -> Option<Signal> {
        let trend = math::trend(math::trailing(ctx.closes, self.trend_window));
        let volatility = math::volatility(math::trailing(ctx.closes, self.volatility_window));
        let mut card = ScoreCard::new();

        card.add_if(
            ctx.change_percent > MIN_CHANGE_PERCENT && trend > STRONG_TREND,
            STRONG_MOMENTUM_WEIGHT,
            "Strong positive momentum",
        );
        card.add_if(
            volatility > MIN_VOLATILITY && trend.abs() > MIN_ABS_TREND,
            VOLATILE_TREND_WEIGHT,
            "High volatility with trend",
        );
        card.add_if(ctx.high_volume, HIGH_VOLUME_WEIGHT, "High volume activity");

        let signal_type = if ctx.change_percent > 0.0 {
            SignalType::Buy
        } else {
            SignalType::Sell
        };
        card.emit(self.threshold, ctx.symbol, Self::NAME, signal_type)
    }
}
