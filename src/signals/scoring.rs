//! Additive condition scoring
//!
//! A strategy checks each of its conditions independently. Every condition
//! that fires adds its fixed weight and a reason to a [`ScoreCard`]; the
//! strategy then emits a signal only when the summed strength reaches its
//! threshold. Conditions are not exclusive and the sum is never normalized.

use crate::models::signal::{meets_threshold, Signal, SignalType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreCard {
    strength: f64,
    reasons: Vec<String>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fired condition
    pub fn add(&mut self, weight: f64, reason: &str) {
        self.strength += weight;
        self.reasons.push(reason.to_string());
    }

    /// Record the condition only if it fired
    pub fn add_if(&mut self, fired: bool, weight: f64, reason: &str) {
        if fired {
            self.add(weight, reason);
        }
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn meets(&self, threshold: f64) -> bool {
        !self.reasons.is_empty() && meets_threshold(self.strength, threshold)
    }

    /// Turn the card into a signal when it reaches `threshold`
    pub fn emit(
        self,
        threshold: f64,
        symbol: &str,
        strategy: &str,
        signal_type: SignalType,
    ) -> Option<Signal> {
        if !self.meets(threshold) {
            return None;
        }
        Some(Signal::new(
            symbol,
            signal_type,
            self.strength,
            self.reasons,
            strategy,
        ))
    }
}
