//! One-shot signal run.
//!
//! `tradesense [BATCH.json] [--execute]`
//!
//! Reads a market batch (a JSON object of symbol to series) or, without a
//! path, simulates the configured watchlist. Prints the signal report as
//! JSON. `--execute` paper-trades the strong signals and adds the executed
//! trades to the output.

use clap::Parser;
use dotenvy::dotenv;
use serde_json::json;
use std::fs;
use tracing::info;
use tradesense::cli::Cli;
use tradesense::config::EngineConfig;
use tradesense::execution::{ExecutionCoordinator, PaperOrderPlacer};
use tradesense::logging;
use tradesense::models::{MarketBatch, Portfolio, TradingMode};
use tradesense::services::{build_batch, SimulatedMarketData};
use tradesense::SignalAggregator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    dotenv().ok();
    logging::init_logging();

    let config = EngineConfig::from_env()?;
    let execute = cli.execute;

    if execute && config.trading_mode == TradingMode::Live {
        return Err("live trading needs a brokerage order placer; use TRADING_MODE=paper".into());
    }

    let batch = match &cli.batch {
        Some(path) => {
            info!(path = %path.display(), "loading market batch from {}", path.display());
            let raw = fs::read_to_string(path)?;
            serde_json::from_str::<MarketBatch>(&raw)?
        }
        None => {
            info!(symbols = ?config.watchlist, "simulating market data for watchlist");
            build_batch(&SimulatedMarketData::new(), &config.watchlist).await
        }
    };

    let aggregator = SignalAggregator::from_config(&config);
    let report = aggregator.generate_signals(&batch);

    let output = if execute {
        let coordinator = ExecutionCoordinator::from_config(&config);
        let trades = coordinator
            .execute(&report.signals, &Portfolio::default(), &PaperOrderPlacer::new())
            .await;
        json!({
            "signals": report.signals,
            "insights": report.insights,
            "executedTrades": trades,
        })
    } else {
        json!({
            "signals": report.signals,
            "insights": report.insights,
        })
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
