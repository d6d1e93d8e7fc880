use crate::common::bullish_snapshot;
use tradesense::config::StrategyThresholds;
use tradesense::models::Signal;
use tradesense::strategies::{MomentumStrategy, Strategy, StrategyContext, StrategyRegistry};

struct AlwaysSell;

impl Strategy for AlwaysSell {
    fn name(&self) -> &'static str {
        "Always Sell"
    }

    fn evaluate(&self, ctx: &StrategyContext<'_>) -> Option<Signal> {
        Some(Signal::new(
            ctx.symbol,
            tradesense::SignalType::Sell,
            0.5,
            vec!["always".to_string()],
            self.name(),
        ))
    }
}

#[test]
fn test_default_registry_order() {
    let registry = StrategyRegistry::default();
    assert_eq!(
        registry.names(),
        vec!["Momentum", "Mean Reversion", "Breakout", "Screen Time", "Volatility"]
    );
    assert_eq!(registry.len(), 5);
}

#[test]
fn test_empty_registry_yields_nothing() {
    let registry = StrategyRegistry::empty();
    let snapshot = bullish_snapshot();
    let ctx = StrategyContext::new("X", 110.0, &snapshot);
    assert!(registry.is_empty());
    assert!(registry.evaluate_all(&ctx).is_empty());
}

#[test]
fn test_registered_strategies_run_in_order() {
    let registry = StrategyRegistry::empty()
        .register(AlwaysSell)
        .register(MomentumStrategy::default());
    let snapshot = bullish_snapshot();
    let ctx = StrategyContext::new("X", 110.0, &snapshot);

    let signals = registry.evaluate_all(&ctx);
    let strategies: Vec<&str> = signals.iter().map(|s| s.strategy.as_str()).collect();
    assert_eq!(strategies, vec!["Always Sell", "Momentum"]);
}

#[test]
fn test_thresholds_are_applied() {
    let thresholds = StrategyThresholds {
        momentum: 0.9,
        ..StrategyThresholds::default()
    };
    let registry = StrategyRegistry::with_thresholds(&thresholds);
    let snapshot = bullish_snapshot();
    let ctx = StrategyContext::new("X", 110.0, &snapshot);

    let signals = registry.evaluate_all(&ctx);
    assert!(signals.iter().all(|s| s.strategy != "Momentum"));
}
