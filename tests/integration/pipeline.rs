use std::sync::Arc;
use tradesense::config::EngineConfig;
use tradesense::execution::{ExecutionCoordinator, PaperOrderPlacer};
use tradesense::metrics::Metrics;
use tradesense::models::{Portfolio, SignalType};
use tradesense::services::{build_batch, SimulatedMarketData};
use tradesense::{InstrumentSeries, MarketBatch, SignalAggregator};

fn deterministic_config() -> EngineConfig {
    EngineConfig::from_lookup(|key| match key {
        "VOLUME_ACTIVITY" => Some("off".to_string()),
        "WATCHLIST" => Some("NIFTY,BANKNIFTY,SENSEX,FINNIFTY,RELIANCE".to_string()),
        _ => None,
    })
    .expect("config")
}

fn rising_series(symbol: &str) -> InstrumentSeries {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 * 1.01f64.powi(i)).collect();
    InstrumentSeries::from_closes(symbol, &closes)
}

#[tokio::test]
async fn test_simulated_watchlist_end_to_end() {
    let config = deterministic_config();
    let metrics = Arc::new(Metrics::new().expect("metrics"));
    let data = SimulatedMarketData::new().with_seed(2024).with_max_step(0.02);

    let batch = build_batch(&data, &config.watchlist).await;
    assert_eq!(batch.len(), 5);

    let aggregator = SignalAggregator::from_config(&config).with_metrics(metrics.clone());
    let report = aggregator.generate_signals(&batch);

    let insights = &report.insights;
    assert_eq!(insights.total_signals, report.signals.len());
    assert_eq!(insights.buy_signals + insights.sell_signals, insights.total_signals);

    // signals come grouped by instrument in watchlist order
    let order: Vec<usize> = report
        .signals
        .iter()
        .map(|s| config.watchlist.iter().position(|w| *w == s.symbol).expect("known symbol"))
        .collect();
    assert!(order.windows(2).all(|w| w[0] <= w[1]));

    let coordinator = ExecutionCoordinator::from_config(&config).with_metrics(metrics.clone());
    let placer = PaperOrderPlacer::new();
    let trades = coordinator
        .execute(&report.signals, &Portfolio::default(), &placer)
        .await;

    let executable = report
        .signals
        .iter()
        .filter(|s| coordinator.should_execute(s))
        .count();
    assert_eq!(trades.len(), executable);
    for trade in &trades {
        assert!(trade.signal.strength >= 0.6 - 1e-9);
        assert!(trade.order.success);
        assert!(trade.order.order_id.as_deref().is_some_and(|id| id.starts_with("SIM_")));
    }

    assert_eq!(metrics.aggregation_runs_total.get(), 1);
    assert_eq!(metrics.orders_placed_total.get() as usize, trades.len());
    assert_eq!(metrics.orders_failed_total.get(), 0);
    assert!(metrics.export().expect("export").contains("tradesense_orders_placed_total"));
}

#[tokio::test]
async fn test_repeated_runs_agree() {
    let config = deterministic_config();
    let data = SimulatedMarketData::new().with_seed(11).with_max_step(0.02);
    let batch = build_batch(&data, &config.watchlist).await;
    let aggregator = SignalAggregator::from_config(&config);

    let first = aggregator.generate_signals(&batch);
    let second = aggregator.generate_signals(&batch);

    assert_eq!(first.signals.len(), second.signals.len());
    for (a, b) in first.signals.iter().zip(&second.signals) {
        assert_eq!(a.symbol, b.symbol);
        assert_eq!(a.strategy, b.strategy);
        assert_eq!(a.signal_type, b.signal_type);
        assert_eq!(a.strength, b.strength);
        assert_eq!(a.reasons, b.reasons);
    }
    assert_eq!(first.insights.market_sentiment, second.insights.market_sentiment);
}

#[test]
fn test_trending_instrument_from_json() {
    let mut batch = MarketBatch::new();
    batch.insert(rising_series("TREND"));
    batch.insert(InstrumentSeries::from_closes("NEW", &[100.0; 20]));
    let json = serde_json::to_string(&batch).expect("serialize");

    let parsed: MarketBatch = serde_json::from_str(&json).expect("parse");
    let aggregator = SignalAggregator::from_config(&deterministic_config());
    let report = aggregator.generate_signals(&parsed);

    assert!(report.signals.iter().all(|s| s.symbol == "TREND"));
    assert!(report
        .signals
        .iter()
        .any(|s| s.strategy == "Momentum" && s.signal_type == SignalType::Buy));

    let value = serde_json::to_value(&report).expect("report json");
    assert!(value["signals"].is_array());
    assert_eq!(value["insights"]["totalSignals"], report.signals.len());
    assert!(value["insights"]["marketSentiment"].is_string());
}
