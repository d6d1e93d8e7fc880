//! SMA (Simple Moving Average) indicator

use crate::indicators::math;

/// Simple moving average of every full window, aligned to the window end
pub fn calculate_sma(prices: &[f64], period: usize) -> Vec<f64> {
    math::rolling_mean(prices, period)
}
