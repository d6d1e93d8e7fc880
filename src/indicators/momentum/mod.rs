//! Momentum oscillators: RSI, MACD

pub mod macd;
pub mod rsi;
