//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::math;
use crate::models::indicators::MacdPoint;

/// Calculate the MACD series
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of MACD
/// Histogram = MACD - Signal
///
/// Output starts once the signal line is defined, i.e. at input index
/// `max(fast, slow) + signal_period - 2`.
pub fn calculate_macd(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Vec<MacdPoint> {
    let fast = math::ema_series(prices, fast_period);
    let slow = math::ema_series(prices, slow_period);
    if fast.is_empty() || slow.is_empty() {
        return Vec::new();
    }

    let start = fast_period.max(slow_period) - 1;
    let macd_line: Vec<f64> = (start..prices.len())
        .map(|i| fast[i + 1 - fast_period] - slow[i + 1 - slow_period])
        .collect();

    let signal_line = math::ema_series(&macd_line, signal_period);
    signal_line
        .iter()
        .enumerate()
        .map(|(j, &signal)| MacdPoint::new(macd_line[j + signal_period - 1], signal))
        .collect()
}
