//! External data services.

pub mod market_data;

pub use market_data::{build_batch, MarketDataProvider, SimulatedMarketData};
