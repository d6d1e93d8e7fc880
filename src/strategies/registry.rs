//! Ordered set of strategies run against every instrument

use crate::config::StrategyThresholds;
use crate::models::signal::Signal;
use crate::strategies::{
    BreakoutStrategy, MeanReversionStrategy, MomentumStrategy, ScreenTimeStrategy, Strategy,
    StrategyContext, VolatilityStrategy,
};

pub struct StrategyRegistry {
    strategies: Vec<Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Registry without any strategy
    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// The five built-in strategies in their canonical order
    pub fn with_thresholds(thresholds: &StrategyThresholds) -> Self {
        Self::empty()
            .register(MomentumStrategy::new(thresholds.momentum))
            .register(MeanReversionStrategy::new(thresholds.mean_reversion))
            .register(BreakoutStrategy::new(thresholds.breakout))
            .register(ScreenTimeStrategy::from_thresholds(thresholds))
            .register(VolatilityStrategy::new(
                thresholds.volatility,
                thresholds.volatility_window,
            ))
    }

    /// Append a strategy; it runs after those already registered
    pub fn register<S: Strategy + 'static>(mut self, strategy: S) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Run every strategy in registration order
    pub fn evaluate_all(&self, ctx: &StrategyContext<'_>) -> Vec<Signal> {
        self.strategies
            .iter()
            .filter_map(|strategy| strategy.evaluate(ctx))
            .collect()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_thresholds(&StrategyThresholds::default())
    }
}
