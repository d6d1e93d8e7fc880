//! Position sizing
//!
//! Sizers turn a signal and the account state into a share quantity. They
//! never decide whether to trade; the coordinator does.

use crate::config::SizingConfig;
use crate::models::order::Portfolio;
use crate::models::signal::Signal;

pub trait PositionSizer: Send + Sync {
    fn size(&self, signal: &Signal, portfolio: &Portfolio) -> u32;

    fn name(&self) -> &str;
}

/// Fixed fractional-risk sizing.
///
/// `quantity = floor(balance * risk_per_trade / risk_per_share)` clamped to
/// `[min_quantity, max_quantity]`. The assumed risk per share is a constant,
/// so neither the signal's price nor its strength changes the result.
#[derive(Debug, Clone, Default)]
pub struct FixedRiskSizer {
    config: SizingConfig,
}

impl FixedRiskSizer {
    pub fn new(config: SizingConfig) -> Self {
        Self { config }
    }

    /// Balance used for sizing; missing, zero or non-finite balances fall
    /// back to the configured default
    pub fn effective_balance(&self, portfolio: &Portfolio) -> f64 {
        portfolio
            .balance
            .filter(|b| b.is_finite() && *b != 0.0)
            .unwrap_or(self.config.default_balance)
    }

    pub fn quantity_for_balance(&self, balance: f64) -> u32 {
        let min = self.config.min_quantity;
        let max = self.config.max_quantity.max(min);
        if self.config.risk_per_share <= 0.0 {
            return min;
        }

        let risk_amount = balance * self.config.risk_per_trade;
        let raw = (risk_amount / self.config.risk_per_share).floor();
        raw.clamp(min as f64, max as f64) as u32
    }
}

impl PositionSizer for FixedRiskSizer {
    fn size(&self, _signal: &Signal, portfolio: &Portfolio) -> u32 {
        self.quantity_for_balance(self.effective_balance(portfolio))
    }

    fn name(&self) -> &str {
        "FixedRisk"
    }
}
