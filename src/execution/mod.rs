//! Turning strong signals into orders.

pub mod coordinator;
pub mod paper;
pub mod sizing;

pub use coordinator::{ExecutionCoordinator, OrderPlacer};
pub use paper::PaperOrderPlacer;
pub use sizing::{FixedRiskSizer, PositionSizer};
