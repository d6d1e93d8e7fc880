use crate::models::indicators::IndicatorSnapshot;

/// Everything a strategy may look at for one instrument
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext<'a> {
    pub symbol: &'a str,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    /// Closing prices, oldest first
    pub closes: &'a [f64],
    pub indicators: &'a IndicatorSnapshot,
    /// Result of the volume activity check for this instrument
    pub high_volume: bool,
}

impl<'a> StrategyContext<'a> {
    pub fn new(symbol: &'a str, current_price: f64, indicators: &'a IndicatorSnapshot) -> Self {
        Self {
            symbol,
            current_price,
            change: 0.0,
            change_percent: 0.0,
            closes: &[],
            indicators,
            high_volume: false,
        }
    }

    pub fn with_change(mut self, change: f64, change_percent: f64) -> Self {
        self.change = change;
        self.change_percent = change_percent;
        self
    }

    pub fn with_closes(mut self, closes: &'a [f64]) -> Self {
        self.closes = closes;
        self
    }

    pub fn with_high_volume(mut self, high_volume: bool) -> Self {
        self.high_volume = high_volume;
        self
    }
}
