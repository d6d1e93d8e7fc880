//! Error types shared across the engine

use thiserror::Error;

/// Failure reported by an order placement collaborator
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("order rejected: {0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("not authorized: {0}")]
    Unauthorized(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MarketDataError {
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
    #[error("market data unavailable for {symbol}: {reason}")]
    Unavailable { symbol: String, reason: String },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}
