use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance applied when comparing a summed strength to a threshold.
/// Weights like 0.4 + 0.2 do not add up to exactly 0.6 in binary floating point.
pub const STRENGTH_EPSILON: f64 = 1e-9;

/// `strength >= threshold`, tolerant of summation error
pub fn meets_threshold(strength: f64, threshold: f64) -> bool {
    strength + STRENGTH_EPSILON >= threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalType {
    Buy,
    Sell,
}

impl SignalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Buy => "BUY",
            SignalType::Sell => "SELL",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discrete trading signal emitted by one strategy for one instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    /// Sum of the weights of every condition that fired
    pub strength: f64,
    /// One entry per contributing condition, in evaluation order
    #[serde(rename = "reason")]
    pub reasons: Vec<String>,
    pub strategy: String,
    pub timestamp: DateTime<Utc>,
}

impl Signal {
    pub fn new(
        symbol: impl Into<String>,
        signal_type: SignalType,
        strength: f64,
        reasons: Vec<String>,
        strategy: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            signal_type,
            strength,
            reasons,
            strategy: strategy.into(),
            timestamp: Utc::now(),
        }
    }

    /// Reasons joined for display
    pub fn reason_text(&self) -> String {
        self.reasons.join(", ")
    }

    pub fn is_buy(&self) -> bool {
        self.signal_type == SignalType::Buy
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketSentiment {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl MarketSentiment {
    /// One side must outnumber the other by strictly more than 1.5x
    pub fn classify(buy_signals: usize, sell_signals: usize) -> Self {
        let buy = buy_signals as f64;
        let sell = sell_signals as f64;
        if buy > sell * 1.5 {
            MarketSentiment::Bullish
        } else if sell > buy * 1.5 {
            MarketSentiment::Bearish
        } else {
            MarketSentiment::Neutral
        }
    }
}

impl fmt::Display for MarketSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MarketSentiment::Bullish => "bullish",
            MarketSentiment::Bearish => "bearish",
            MarketSentiment::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Rollup of one signal batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsSummary {
    pub total_signals: usize,
    pub buy_signals: usize,
    pub sell_signals: usize,
    pub strong_signals: usize,
    pub market_sentiment: MarketSentiment,
    pub timestamp: DateTime<Utc>,
}

impl InsightsSummary {
    /// Summary of an empty batch
    pub fn empty() -> Self {
        Self {
            total_signals: 0,
            buy_signals: 0,
            sell_signals: 0,
            strong_signals: 0,
            market_sentiment: MarketSentiment::Neutral,
            timestamp: Utc::now(),
        }
    }

    pub fn from_signals(signals: &[Signal], strong_threshold: f64) -> Self {
        let buy_signals = signals.iter().filter(|s| s.is_buy()).count();
        let sell_signals = signals.len() - buy_signals;
        let strong_signals = signals
            .iter()
            .filter(|s| meets_threshold(s.strength, strong_threshold))
            .count();

        Self {
            total_signals: signals.len(),
            buy_signals,
            sell_signals,
            strong_signals,
            market_sentiment: MarketSentiment::classify(buy_signals, sell_signals),
            timestamp: Utc::now(),
        }
    }

    /// Same counts, fresh timestamp
    pub fn refreshed(&self) -> Self {
        Self {
            timestamp: Utc::now(),
            ..self.clone()
        }
    }
}

/// Result of one aggregation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    pub signals: Vec<Signal>,
    pub insights: InsightsSummary,
}
