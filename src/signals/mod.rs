//! Signal generation: per-instrument analysis and batch aggregation.

pub mod aggregator;
pub mod analyzer;
pub mod scoring;

pub use aggregator::SignalAggregator;
pub use analyzer::{InstrumentAnalyzer, MIN_PRICE_POINTS};
pub use scoring::ScoreCard;
