//! Indicator capability consumed by the instrument analyzer

use crate::indicators::momentum::{macd, rsi};
use crate::indicators::trend::sma;
use crate::indicators::volatility::bollinger;
use crate::models::indicators::{BollingerPoint, MacdPoint};

/// Computes indicator series from closing prices.
///
/// Every method returns a sequence aligned to the trailing end of `prices`
/// (the last element belongs to the most recent close). An empty sequence
/// means there is not enough data.
pub trait IndicatorProvider: Send + Sync {
    fn compute_sma(&self, period: usize, prices: &[f64]) -> Vec<f64>;

    fn compute_rsi(&self, period: usize, prices: &[f64]) -> Vec<f64>;

    fn compute_macd(
        &self,
        fast_period: usize,
        slow_period: usize,
        signal_period: usize,
        prices: &[f64],
    ) -> Vec<MacdPoint>;

    fn compute_bollinger(&self, period: usize, std_dev: f64, prices: &[f64]) -> Vec<BollingerPoint>;
}

/// Built-in indicator math
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardIndicators;

impl IndicatorProvider for StandardIndicators {
    fn compute_sma(&self, period: usize, prices: &[f64]) -> Vec<f64> {
        sma::calculate_sma(prices, period)
    }

    fn compute_rsi(&self, period: usize, prices: &[f64]) -> Vec<f64> {
        rsi::calculate_rsi(prices, period)
    }

    fn compute_macd(
        &self,
        fast_period: usize,
        slow_period: usize,
        signal_period: usize,
        prices: &[f64],
    ) -> Vec<MacdPoint> {
        macd::calculate_macd(prices, fast_period, slow_period, signal_period)
    }

    fn compute_bollinger(
        &self,
        period: usize,
        std_dev: f64,
        prices: &[f64],
    ) -> Vec<BollingerPoint> {
        bollinger::calculate_bollinger_bands(prices, period, std_dev)
    }
}
