//! Trend indicators: moving averages

pub mod sma;
