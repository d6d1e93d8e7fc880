use crate::common::{bullish_snapshot, flat_closes, FixedIndicators};
use std::sync::Arc;
use tradesense::metrics::Metrics;
use tradesense::models::MarketSentiment;
use tradesense::strategies::NoVolumeActivity;
use tradesense::{InstrumentAnalyzer, InstrumentSeries, MarketBatch, SignalAggregator};

fn fixed_aggregator() -> SignalAggregator {
    let analyzer = InstrumentAnalyzer::new()
        .with_provider(FixedIndicators {
            snapshot: bullish_snapshot(),
        })
        .with_volume_activity(Box::new(NoVolumeActivity));
    SignalAggregator::new(analyzer)
}

/// RELIANCE fires Momentum and Breakout, TCS only Momentum, SHORT is skipped
fn mixed_batch() -> MarketBatch {
    [
        InstrumentSeries::from_closes("RELIANCE", &flat_closes(60, 100.0))
            .with_quote(110.0, 10.0, 10.0),
        InstrumentSeries::from_closes("SHORT", &flat_closes(10, 100.0))
            .with_quote(110.0, 10.0, 10.0),
        InstrumentSeries::from_closes("TCS", &flat_closes(60, 100.0))
            .with_quote(90.0, -10.0, -10.0),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_insights_before_first_run() {
    let insights = SignalAggregator::default().insights();
    assert_eq!(insights.total_signals, 0);
    assert_eq!(insights.strong_signals, 0);
    assert_eq!(insights.market_sentiment, MarketSentiment::Neutral);
}

#[test]
fn test_generate_signals_in_batch_order() {
    let report = fixed_aggregator().generate_signals(&mixed_batch());

    let produced: Vec<(&str, &str)> = report
        .signals
        .iter()
        .map(|s| (s.symbol.as_str(), s.strategy.as_str()))
        .collect();
    assert_eq!(
        produced,
        vec![
            ("RELIANCE", "Momentum"),
            ("RELIANCE", "Breakout"),
            ("TCS", "Momentum"),
        ]
    );
}

#[test]
fn test_report_insights() {
    let report = fixed_aggregator().generate_signals(&mixed_batch());
    let insights = &report.insights;

    assert_eq!(insights.total_signals, 3);
    assert_eq!(insights.buy_signals, 3);
    assert_eq!(insights.sell_signals, 0);
    assert_eq!(insights.strong_signals, 2);
    assert_eq!(insights.market_sentiment, MarketSentiment::Bullish);
}

#[test]
fn test_latest_insights_follow_last_run() {
    let aggregator = fixed_aggregator();
    let report = aggregator.generate_signals(&mixed_batch());

    let latest = aggregator.insights();
    assert_eq!(latest.total_signals, report.insights.total_signals);
    assert_eq!(latest.strong_signals, report.insights.strong_signals);
    assert_eq!(latest.market_sentiment, report.insights.market_sentiment);
    assert!(latest.timestamp >= report.insights.timestamp);

    aggregator.generate_signals(&MarketBatch::new());
    assert_eq!(aggregator.insights().total_signals, 0);
}

#[test]
fn test_empty_batch() {
    let report = SignalAggregator::default().generate_signals(&MarketBatch::new());
    assert!(report.signals.is_empty());
    assert_eq!(report.insights.market_sentiment, MarketSentiment::Neutral);
}

#[test]
fn test_custom_strong_threshold() {
    let aggregator = fixed_aggregator().with_strong_threshold(0.4);
    let report = aggregator.generate_signals(&mixed_batch());
    assert_eq!(report.insights.strong_signals, 3);
}

#[test]
fn test_metrics_are_recorded() {
    let metrics = Arc::new(Metrics::new().expect("metrics"));
    let aggregator = fixed_aggregator().with_metrics(metrics.clone());
    aggregator.generate_signals(&mixed_batch());

    assert_eq!(metrics.aggregation_runs_total.get(), 1);
    assert_eq!(metrics.instruments_skipped_total.get(), 1);
    assert_eq!(
        metrics
            .signals_generated_total
            .with_label_values(&["Momentum", "BUY"])
            .get(),
        2
    );
    assert_eq!(metrics.aggregation_duration_seconds.get_sample_count(), 1);
}
