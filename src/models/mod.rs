//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod order;
pub mod signal;

pub use indicators::{BollingerPoint, IndicatorSnapshot, MacdPoint};
pub use market::{InstrumentSeries, MarketBatch, PricePoint};
pub use order::{
    ExecutedTrade, OrderRequest, OrderResult, OrderType, Portfolio, TradingMode, TransactionType,
};
pub use signal::{InsightsSummary, MarketSentiment, Signal, SignalReport, SignalType};
