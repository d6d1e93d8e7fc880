use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdPoint {
    pub fn new(macd: f64, signal: f64) -> Self {
        Self {
            macd,
            signal,
            histogram: macd - signal,
        }
    }

    pub fn is_bullish(&self) -> bool {
        self.macd > self.signal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerPoint {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerPoint {
    pub fn new(upper: f64, middle: f64, lower: f64) -> Self {
        Self {
            upper,
            middle,
            lower,
        }
    }

    /// Band width relative to the middle band, `None` when the middle is zero
    pub fn width_ratio(&self) -> Option<f64> {
        if self.middle == 0.0 {
            return None;
        }
        Some((self.upper - self.lower) / self.middle)
    }
}

/// Latest value of every indicator the strategies read, aligned to the most
/// recent close. A `None` field means the indicator has not warmed up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma20: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma50: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerPoint>,
}

impl IndicatorSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sma20(mut self, value: f64) -> Self {
        self.sma20 = Some(value);
        self
    }

    pub fn with_sma50(mut self, value: f64) -> Self {
        self.sma50 = Some(value);
        self
    }

    pub fn with_rsi(mut self, value: f64) -> Self {
        self.rsi = Some(value);
        self
    }

    pub fn with_macd(mut self, macd: MacdPoint) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_bollinger(mut self, bands: BollingerPoint) -> Self {
        self.bollinger = Some(bands);
        self
    }
}
