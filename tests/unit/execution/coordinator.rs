use crate::common::signal;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tradesense::config::ExecutionConfig;
use tradesense::execution::{ExecutionCoordinator, FixedRiskSizer, OrderPlacer};
use tradesense::metrics::Metrics;
use tradesense::models::{
    OrderRequest, OrderResult, OrderType, Portfolio, TradingMode, TransactionType,
};
use tradesense::{OrderError, SignalType};

/// Records every request; errors or rejects the listed symbols
#[derive(Default)]
struct ScriptedPlacer {
    requests: Mutex<Vec<OrderRequest>>,
    fail: Vec<&'static str>,
    reject: Vec<&'static str>,
}

impl ScriptedPlacer {
    fn submitted(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.tradingsymbol.clone())
            .collect()
    }
}

#[async_trait]
impl OrderPlacer for ScriptedPlacer {
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderResult, OrderError> {
        self.requests.lock().unwrap().push(request.clone());
        let symbol = request.tradingsymbol.as_str();

        if self.fail.iter().any(|s| *s == symbol) {
            return Err(OrderError::Transport("connection reset".to_string()));
        }
        if self.reject.iter().any(|s| *s == symbol) {
            return Ok(OrderResult {
                success: false,
                order_id: None,
                message: Some("insufficient margin".to_string()),
                mode: TradingMode::Paper,
            });
        }
        Ok(OrderResult {
            success: true,
            order_id: Some(format!("ORD_{}", symbol)),
            message: None,
            mode: TradingMode::Paper,
        })
    }

    fn mode(&self) -> TradingMode {
        TradingMode::Paper
    }
}

fn mixed_strengths() -> Vec<tradesense::Signal> {
    vec![
        signal("WEAK", SignalType::Buy, 0.5),
        signal("EDGE", SignalType::Buy, 0.6),
        signal("STRONG", SignalType::Sell, 0.9),
    ]
}

#[tokio::test]
async fn test_only_strong_signals_are_submitted() {
    let placer = ScriptedPlacer::default();
    let coordinator = ExecutionCoordinator::default();

    let trades = coordinator
        .execute(&mixed_strengths(), &Portfolio::default(), &placer)
        .await;

    assert_eq!(placer.submitted(), vec!["EDGE", "STRONG"]);
    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].signal.symbol, "EDGE");
    assert_eq!(trades[1].order.order_id.as_deref(), Some("ORD_STRONG"));
}

#[tokio::test]
async fn test_failure_does_not_stop_later_signals() {
    let placer = ScriptedPlacer {
        fail: vec!["EDGE"],
        ..Default::default()
    };
    let trades = ExecutionCoordinator::default()
        .execute(&mixed_strengths(), &Portfolio::default(), &placer)
        .await;

    assert_eq!(placer.submitted(), vec!["EDGE", "STRONG"]);
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].signal.symbol, "STRONG");
}

#[tokio::test]
async fn test_rejections_are_not_returned() {
    let metrics = Arc::new(Metrics::new().unwrap());
    let placer = ScriptedPlacer {
        reject: vec!["STRONG"],
        ..Default::default()
    };
    let trades = ExecutionCoordinator::default()
        .with_metrics(metrics.clone())
        .execute(&mixed_strengths(), &Portfolio::default(), &placer)
        .await;

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].signal.symbol, "EDGE");
    assert_eq!(metrics.orders_placed_total.get(), 1);
    assert_eq!(metrics.orders_failed_total.get(), 1);
}

#[tokio::test]
async fn test_every_failure_yields_empty_result() {
    let placer = ScriptedPlacer {
        fail: vec!["EDGE", "STRONG"],
        ..Default::default()
    };
    let trades = ExecutionCoordinator::default()
        .execute(&mixed_strengths(), &Portfolio::default(), &placer)
        .await;
    assert!(trades.is_empty());
}

#[test]
fn test_order_request_fields() {
    let coordinator = ExecutionCoordinator::default();
    let request = coordinator.build_order(
        &signal("BANKNIFTY", SignalType::Sell, 0.7),
        &Portfolio::with_balance(100_000.0),
    );

    assert_eq!(request.tradingsymbol, "BANKNIFTY");
    assert_eq!(request.exchange, "NSE");
    assert_eq!(request.product, "MIS");
    assert_eq!(request.transaction_type, TransactionType::Sell);
    assert_eq!(request.order_type, OrderType::Market);
    assert_eq!(request.quantity, 20);
}

#[test]
fn test_custom_execution_threshold() {
    let coordinator = ExecutionCoordinator::new(
        ExecutionConfig {
            min_strength: 0.8,
            ..ExecutionConfig::default()
        },
        Box::new(FixedRiskSizer::default()),
    );
    assert!(!coordinator.should_execute(&signal("A", SignalType::Buy, 0.7)));
    assert!(coordinator.should_execute(&signal("A", SignalType::Buy, 0.8)));
}

#[test]
fn test_summed_strength_meets_threshold() {
    let coordinator = ExecutionCoordinator::default();
    assert!(coordinator.should_execute(&signal("A", SignalType::Buy, 0.4 + 0.2)));
    assert!(!coordinator.should_execute(&signal("A", SignalType::Buy, 0.59)));
}
