use crate::common::{assert_strength, bands};
use tradesense::models::{IndicatorSnapshot, SignalType};
use tradesense::strategies::{BreakoutStrategy, Strategy, StrategyContext};

#[test]
fn test_upper_breakout_above_sma_buys() {
    let snapshot = IndicatorSnapshot::new()
        .with_sma20(100.0)
        .with_bollinger(bands(108.0, 100.0, 92.0));
    let ctx = StrategyContext::new("SBIN", 110.0, &snapshot);

    let signal = BreakoutStrategy::default().evaluate(&ctx).expect("signal");
    assert_eq!(signal.signal_type, SignalType::Buy);
    assert_eq!(signal.strategy, "Breakout");
    assert_strength(signal.strength, 0.7);
    assert_eq!(signal.reasons, vec!["Breakout above upper Bollinger Band", "Price above SMA20"]);
}

#[test]
fn test_lower_breakdown_alone_is_not_enough() {
    let snapshot = IndicatorSnapshot::new()
        .with_sma20(100.0)
        .with_bollinger(bands(108.0, 100.0, 92.0));
    let ctx = StrategyContext::new("SBIN", 90.0, &snapshot);
    assert!(BreakoutStrategy::default().evaluate(&ctx).is_none());
}

#[test]
fn test_lower_breakdown_above_sma_sells() {
    let snapshot = IndicatorSnapshot::new()
        .with_sma20(90.0)
        .with_bollinger(bands(110.0, 100.0, 95.0));
    let ctx = StrategyContext::new("SBIN", 94.0, &snapshot);

    let signal = BreakoutStrategy::default().evaluate(&ctx).expect("signal");
    assert_eq!(signal.signal_type, SignalType::Sell);
    assert_strength(signal.strength, 0.7);
    assert_eq!(signal.reasons, vec!["Breakout below lower Bollinger Band", "Price above SMA20"]);
}

#[test]
fn test_no_bands_no_signal() {
    let snapshot = IndicatorSnapshot::new().with_sma20(100.0);
    let ctx = StrategyContext::new("SBIN", 120.0, &snapshot);
    assert!(BreakoutStrategy::default().evaluate(&ctx).is_none());
}
