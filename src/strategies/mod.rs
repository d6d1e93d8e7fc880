//! Strategy evaluators that turn an indicator snapshot into signals.
//!
//! Each strategy is a pure function of its [`StrategyContext`]. Strategies
//! hold only their configuration, so one registry can be shared by every
//! instrument of a batch.

pub mod breakout;
pub mod context;
pub mod mean_reversion;
pub mod momentum;
pub mod registry;
pub mod screen_time;
pub mod volatility;
pub mod volume;

pub use breakout::BreakoutStrategy;
pub use context::StrategyContext;
pub use mean_reversion::MeanReversionStrategy;
pub use momentum::MomentumStrategy;
pub use registry::StrategyRegistry;
pub use screen_time::ScreenTimeStrategy;
pub use volatility::VolatilityStrategy;
pub use volume::{NoVolumeActivity, RandomVolumeActivity, RelativeVolume, VolumeActivity};

use crate::models::signal::Signal;

/// A scoring strategy producing at most one signal per instrument
pub trait Strategy: Send + Sync {
    /// Display name, copied into every emitted signal
    fn name(&self) -> &'static str;

    fn evaluate(&self, ctx: &StrategyContext<'_>) -> Option<Signal>;
}
