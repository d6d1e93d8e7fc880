//! Simulated order placement for paper trading

use crate::error::OrderError;
use crate::execution::coordinator::OrderPlacer;
use crate::models::order::{OrderRequest, OrderResult, TradingMode};
use async_trait::async_trait;
use rand::Rng;
use tracing::info;

const ORDER_ID_PREFIX: &str = "SIM_";
const ORDER_ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const ORDER_ID_LEN: usize = 9;

/// Accepts every well-formed order without touching a brokerage
#[derive(Debug, Clone, Copy, Default)]
pub struct PaperOrderPlacer;

impl PaperOrderPlacer {
    pub fn new() -> Self {
        Self
    }
}

/// `SIM_` followed by nine random lowercase alphanumerics
pub fn simulated_order_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ORDER_ID_LEN)
        .map(|_| ORDER_ID_CHARSET[rng.gen_range(0..ORDER_ID_CHARSET.len())] as char)
        .collect();
    format!("{}{}", ORDER_ID_PREFIX, suffix)
}

#[async_trait]
impl OrderPlacer for PaperOrderPlacer {
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderResult, OrderError> {
        if request.quantity == 0 {
            return Err(OrderError::Rejected("quantity must be positive".to_string()));
        }

        let order_id = simulated_order_id();
        info!(
            order_id = %order_id,
            symbol = %request.tradingsymbol,
            side = ?request.transaction_type,
            quantity = request.quantity,
            "simulated {:?} order for {} x{}",
            request.transaction_type,
            request.tradingsymbol,
            request.quantity
        );

        Ok(OrderResult {
            success: true,
            order_id: Some(order_id),
            message: Some("Order placed successfully (simulated)".to_string()),
            mode: TradingMode::Paper,
        })
    }

    fn mode(&self) -> TradingMode {
        TradingMode::Paper
    }
}
