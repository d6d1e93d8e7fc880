//! Bollinger Bands indicator

use crate::indicators::math;
use crate::models::indicators::BollingerPoint;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// Standard deviation is the population deviation of the window.
pub fn calculate_bollinger_bands(
    prices: &[f64],
    period: usize,
    std_dev: f64,
) -> Vec<BollingerPoint> {
    if period == 0 || prices.len() < period {
        return Vec::new();
    }

    prices
        .windows(period)
        .filter_map(|window| {
            let middle = math::mean(window)?;
            let deviation = math::population_std_dev(window)?;
            Some(BollingerPoint::new(
                middle + std_dev * deviation,
                middle,
                middle - std_dev * deviation,
            ))
        })
        .collect()
}
