//! Order execution for strong signals

use crate::config::{EngineConfig, ExecutionConfig};
use crate::error::OrderError;
use crate::execution::sizing::{FixedRiskSizer, PositionSizer};
use crate::metrics::Metrics;
use crate::models::order::{
    ExecutedTrade, OrderRequest, OrderResult, OrderType, Portfolio, TradingMode,
};
use crate::models::signal::{meets_threshold, Signal};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Brokerage-side order placement.
///
/// `Ok` with `success == false` is a rejection the broker reported; `Err` is
/// a failure to get an answer at all. The coordinator treats both the same.
#[async_trait]
pub trait OrderPlacer: Send + Sync {
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderResult, OrderError>;

    fn mode(&self) -> TradingMode;
}

pub struct ExecutionCoordinator {
    config: ExecutionConfig,
    sizer: Box<dyn PositionSizer>,
    metrics: Option<Arc<Metrics>>,
}

impl ExecutionCoordinator {
    pub fn new(config: ExecutionConfig, sizer: Box<dyn PositionSizer>) -> Self {
        Self {
            config,
            sizer,
            metrics: None,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.execution.clone(),
            Box::new(FixedRiskSizer::new(config.sizing.clone())),
        )
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn should_execute(&self, signal: &Signal) -> bool {
        meets_threshold(signal.strength, self.config.min_strength)
    }

    /// Market order for the signal's side, sized by the configured sizer
    pub fn build_order(&self, signal: &Signal, portfolio: &Portfolio) -> OrderRequest {
        OrderRequest {
            tradingsymbol: signal.symbol.clone(),
            exchange: self.config.exchange.clone(),
            transaction_type: signal.signal_type.into(),
            quantity: self.sizer.size(signal, portfolio),
            product: self.config.product.clone(),
            order_type: OrderType::Market,
        }
    }

    /// Place an order for every signal strong enough, one at a time in
    /// signal order. A failed placement is logged and skipped; it never
    /// stops the remaining signals. Only accepted orders are returned.
    pub async fn execute(
        &self,
        signals: &[Signal],
        portfolio: &Portfolio,
        placer: &dyn OrderPlacer,
    ) -> Vec<ExecutedTrade> {
        let mut executed = Vec::new();

        for signal in signals {
            if !self.should_execute(signal) {
                debug!(
                    symbol = %signal.symbol,
                    strategy = %signal.strategy,
                    strength = signal.strength,
                    "skipping signal below execution strength"
                );
                continue;
            }

            let request = self.build_order(signal, portfolio);
            match placer.place_order(&request).await {
                Ok(order) if order.success => {
                    info!(
                        symbol = %signal.symbol,
                        strategy = %signal.strategy,
                        side = %signal.signal_type,
                        quantity = request.quantity,
                        order_id = order.order_id.as_deref().unwrap_or(""),
                        mode = %order.mode,
                        "executed {} {} x{}",
                        signal.signal_type,
                        signal.symbol,
                        request.quantity
                    );
                    if let Some(metrics) = &self.metrics {
                        metrics.orders_placed_total.inc();
                    }
                    executed.push(ExecutedTrade {
                        signal: signal.clone(),
                        order,
                        timestamp: Utc::now(),
                    });
                }
                Ok(order) => {
                    warn!(
                        symbol = %signal.symbol,
                        message = order.message.as_deref().unwrap_or(""),
                        "order rejected for {}",
                        signal.symbol
                    );
                    self.record_failure();
                }
                Err(e) => {
                    error!(
                        symbol = %signal.symbol,
                        error = %e,
                        "failed to execute trade for {}",
                        signal.symbol
                    );
                    self.record_failure();
                }
            }
        }

        executed
    }

    fn record_failure(&self) {
        if let Some(metrics) = &self.metrics {
            metrics.orders_failed_total.inc();
        }
    }
}

impl Default for ExecutionCoordinator {
    fn default() -> Self {
        Self::new(ExecutionConfig::default(), Box::new(FixedRiskSizer::default()))
    }
}
