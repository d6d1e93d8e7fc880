//! Signal generation and aggregation engine.
//!
//! Price series go in, BUY/SELL signals with a strength and rationale come
//! out, rolled up into a market sentiment summary. Strong signals can be
//! turned into orders sized by a fixed-risk rule.

pub mod cli;
pub mod config;
pub mod error;
pub mod execution;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
pub mod strategies;

pub use error::{ConfigError, MarketDataError, OrderError};
pub use models::{InsightsSummary, InstrumentSeries, MarketBatch, Signal, SignalReport, SignalType};
pub use signals::{InstrumentAnalyzer, SignalAggregator};
