//! Prometheus counters for signal generation and order execution

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    /// Labelled by `strategy` and `type`
    pub signals_generated_total: IntCounterVec,
    pub aggregation_runs_total: IntCounter,
    /// Instruments dropped for lack of history
    pub instruments_skipped_total: IntCounter,
    pub orders_placed_total: IntCounter,
    pub orders_failed_total: IntCounter,
    pub aggregation_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("tradesense".to_string()), None)?;

        let signals_generated_total = IntCounterVec::new(
            Opts::new("signals_generated_total", "Signals emitted by strategies"),
            &["strategy", "type"],
        )?;
        let aggregation_runs_total =
            IntCounter::new("aggregation_runs_total", "Completed aggregation runs")?;
        let instruments_skipped_total = IntCounter::new(
            "instruments_skipped_total",
            "Instruments skipped for insufficient price history",
        )?;
        let orders_placed_total =
            IntCounter::new("orders_placed_total", "Orders accepted by the order placer")?;
        let orders_failed_total = IntCounter::new(
            "orders_failed_total",
            "Orders rejected by or failed in the order placer",
        )?;
        let aggregation_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "aggregation_duration_seconds",
                "Wall time of one aggregation run",
            )
            .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
        )?;

        registry.register(Box::new(signals_generated_total.clone()))?;
        registry.register(Box::new(aggregation_runs_total.clone()))?;
        registry.register(Box::new(instruments_skipped_total.clone()))?;
        registry.register(Box::new(orders_placed_total.clone()))?;
        registry.register(Box::new(orders_failed_total.clone()))?;
        registry.register(Box::new(aggregation_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            signals_generated_total,
            aggregation_runs_total,
            instruments_skipped_total,
            orders_placed_total,
            orders_failed_total,
            aggregation_duration_seconds,
        })
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
