//! Tradesense Worker
//!
//! Evaluates the watchlist on a fixed interval and, with `AUTO_EXECUTE=true`,
//! paper-trades the strong signals.

use dotenvy::dotenv;
use std::env;
use std::sync::Arc;
use tokio::signal;
use tokio::time::{interval, Duration};
use tracing::{debug, info, warn};
use tradesense::config::{self, EngineConfig};
use tradesense::execution::{ExecutionCoordinator, OrderPlacer, PaperOrderPlacer};
use tradesense::logging;
use tradesense::metrics::Metrics;
use tradesense::models::{Portfolio, TradingMode};
use tradesense::services::{build_batch, MarketDataProvider, SimulatedMarketData};
use tradesense::SignalAggregator;

struct Worker {
    config: EngineConfig,
    aggregator: SignalAggregator,
    coordinator: ExecutionCoordinator,
    provider: Box<dyn MarketDataProvider>,
    placer: Box<dyn OrderPlacer>,
    portfolio: Portfolio,
    auto_execute: bool,
}

impl Worker {
    async fn run_cycle(&self) {
        let batch = build_batch(self.provider.as_ref(), &self.config.watchlist).await;
        if batch.is_empty() {
            warn!("no market data available this cycle");
            return;
        }

        let report = self.aggregator.generate_signals(&batch);
        for signal in &report.signals {
            info!(
                symbol = %signal.symbol,
                strategy = %signal.strategy,
                side = %signal.signal_type,
                strength = signal.strength,
                reason = %signal.reason_text(),
                "signal"
            );
        }

        if !self.auto_execute {
            return;
        }

        let trades = self
            .coordinator
            .execute(&report.signals, &self.portfolio, self.placer.as_ref())
            .await;
        info!(
            executed = trades.len(),
            mode = %self.placer.mode(),
            "executed {} trades",
            trades.len()
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = EngineConfig::from_env()?;
    let environment = config::get_environment();
    info!("Starting Tradesense Worker");
    info!(environment = %environment, "Environment");

    if config.evaluation_interval_seconds == 0 {
        return Err("EVAL_INTERVAL_SECONDS must be > 0 for worker".into());
    }

    let auto_execute = env::var("AUTO_EXECUTE")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false);
    if auto_execute && config.trading_mode == TradingMode::Live {
        return Err("live trading needs a brokerage order placer; use TRADING_MODE=paper".into());
    }

    info!(
        interval = config.evaluation_interval_seconds,
        symbols = ?config.watchlist,
        auto_execute,
        volume_activity = ?config.volume_activity,
        "Signal evaluation: every {} seconds",
        config.evaluation_interval_seconds
    );

    let metrics = Arc::new(Metrics::new()?);
    let worker = Worker {
        aggregator: SignalAggregator::from_config(&config).with_metrics(metrics.clone()),
        coordinator: ExecutionCoordinator::from_config(&config).with_metrics(metrics.clone()),
        provider: Box::new(SimulatedMarketData::new()),
        placer: Box::new(PaperOrderPlacer::new()),
        portfolio: Portfolio::default(),
        auto_execute,
        config,
    };

    let mut ticker = interval(Duration::from_secs(worker.config.evaluation_interval_seconds));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                worker.run_cycle().await;
                let insights = worker.aggregator.insights();
                info!(
                    total = insights.total_signals,
                    strong = insights.strong_signals,
                    sentiment = %insights.market_sentiment,
                    "market sentiment {}",
                    insights.market_sentiment
                );
            }
            _ = signal::ctrl_c() => {
                info!("Shutting down worker...");
                break;
            }
        }
    }

    match metrics.export() {
        Ok(text) => debug!(metrics = %text, "final metrics"),
        Err(e) => warn!(error = %e, "failed to export metrics"),
    }
    info!("Worker stopped");
    Ok(())
}
