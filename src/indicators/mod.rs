//! Technical indicators behind the [`IndicatorProvider`] capability.

pub mod math;
pub mod momentum;
pub mod provider;
pub mod trend;
pub mod volatility;

pub use provider::{IndicatorProvider, StandardIndicators};
