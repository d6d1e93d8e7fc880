//! Environment driven configuration.
//!
//! Every tunable number of the engine lives here with a default equal to the
//! value the strategies were calibrated with. Binaries load `.env` through
//! `dotenvy` before calling [`EngineConfig::from_env`].

use crate::error::ConfigError;
use crate::models::order::TradingMode;
use std::env;
use std::str::FromStr;

/// Deployment environment (`production`, `sandbox`, ...)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Emission thresholds and look-back windows used by the strategies
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyThresholds {
    /// Instruments with fewer closes than this produce no signals
    pub min_history: usize,
    /// Signals at or above this strength count as strong in insights
    pub strong_signal_strength: f64,
    pub momentum: f64,
    pub mean_reversion: f64,
    pub breakout: f64,
    pub screen_time: f64,
    pub volatility: f64,
    pub trend_window: usize,
    pub volatility_window: usize,
}

impl Default for StrategyThresholds {
    fn default() -> Self {
        Self {
            min_history: 50,
            strong_signal_strength: 0.7,
            momentum: 0.4,
            mean_reversion: 0.5,
            breakout: 0.6,
            screen_time: 0.5,
            volatility: 0.6,
            trend_window: 10,
            volatility_window: 20,
        }
    }
}

/// Fixed fractional-risk sizing parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SizingConfig {
    pub risk_per_trade: f64,
    /// Assumed risk per share in account currency
    pub risk_per_share: f64,
    pub default_balance: f64,
    pub min_quantity: u32,
    pub max_quantity: u32,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            risk_per_trade: 0.02,
            risk_per_share: 100.0,
            default_balance: 100_000.0,
            min_quantity: 1,
            max_quantity: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionConfig {
    /// Only signals at or above this strength are sent for placement
    pub min_strength: f64,
    pub exchange: String,
    pub product: String,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            min_strength: 0.6,
            exchange: "NSE".to_string(),
            product: "MIS".to_string(),
        }
    }
}

/// Source of the Screen Time volume condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeActivityMode {
    /// Compare the latest bar volume with its trailing average
    Volume,
    /// Fire with a fixed probability, for parity with the legacy engine
    Random,
    Off,
}

impl FromStr for VolumeActivityMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "volume" => Ok(Self::Volume),
            "random" => Ok(Self::Random),
            "off" | "none" => Ok(Self::Off),
            other => Err(ConfigError::InvalidValue {
                key: "VOLUME_ACTIVITY".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub thresholds: StrategyThresholds,
    pub sizing: SizingConfig,
    pub execution: ExecutionConfig,
    pub volume_activity: VolumeActivityMode,
    pub trading_mode: TradingMode,
    pub watchlist: Vec<String>,
    pub evaluation_interval_seconds: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: StrategyThresholds::default(),
            sizing: SizingConfig::default(),
            execution: ExecutionConfig::default(),
            volume_activity: VolumeActivityMode::Volume,
            trading_mode: TradingMode::Paper,
            watchlist: default_watchlist(),
            evaluation_interval_seconds: 60,
        }
    }
}

pub fn default_watchlist() -> Vec<String> {
    ["NIFTY", "BANKNIFTY", "SENSEX", "FINNIFTY"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl EngineConfig {
    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    /// Missing keys keep their defaults; present but malformed keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = parse_key(&lookup, "MIN_EXECUTION_STRENGTH")? {
            config.execution.min_strength = v;
        }
        if let Some(v) = parse_key(&lookup, "STRONG_SIGNAL_STRENGTH")? {
            config.thresholds.strong_signal_strength = v;
        }
        if let Some(v) = parse_key(&lookup, "MIN_HISTORY")? {
            config.thresholds.min_history = v;
        }
        if let Some(v) = parse_key(&lookup, "RISK_PER_TRADE")? {
            config.sizing.risk_per_trade = v;
        }
        if let Some(v) = parse_key(&lookup, "RISK_PER_SHARE")? {
            config.sizing.risk_per_share = v;
        }
        if let Some(v) = parse_key(&lookup, "DEFAULT_BALANCE")? {
            config.sizing.default_balance = v;
        }
        if let Some(v) = parse_key(&lookup, "MAX_POSITION_SIZE")? {
            config.sizing.max_quantity = v;
        }
        if let Some(v) = parse_key(&lookup, "EVAL_INTERVAL_SECONDS")? {
            config.evaluation_interval_seconds = v;
        }
        if let Some(exchange) = lookup("EXCHANGE") {
            config.execution.exchange = exchange;
        }
        if let Some(product) = lookup("PRODUCT") {
            config.execution.product = product;
        }
        if let Some(mode) = lookup("VOLUME_ACTIVITY") {
            config.volume_activity = mode.parse()?;
        }
        if let Some(mode) = lookup("TRADING_MODE") {
            config.trading_mode = mode.parse()?;
        }
        if let Some(list) = lookup("WATCHLIST") {
            let symbols: Vec<String> = list
                .split(',')
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect();
            if !symbols.is_empty() {
                config.watchlist = symbols;
            }
        }

        Ok(config)
    }
}

fn parse_key<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}
