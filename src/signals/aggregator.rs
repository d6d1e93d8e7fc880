//! Batch aggregation and sentiment insights

use crate::config::{EngineConfig, StrategyThresholds};
use crate::metrics::Metrics;
use crate::models::market::MarketBatch;
use crate::models::signal::{InsightsSummary, SignalReport};
use crate::signals::analyzer::InstrumentAnalyzer;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::info;

/// Runs the analyzer over a whole batch and summarizes the result.
///
/// The report returned by [`SignalAggregator::generate_signals`] is the
/// authoritative result. The aggregator also remembers the latest summary
/// (last write wins) for callers that only query insights.
pub struct SignalAggregator {
    analyzer: InstrumentAnalyzer,
    strong_threshold: f64,
    latest: Mutex<InsightsSummary>,
    metrics: Option<Arc<Metrics>>,
}

impl SignalAggregator {
    pub fn new(analyzer: InstrumentAnalyzer) -> Self {
        Self {
            analyzer,
            strong_threshold: StrategyThresholds::default().strong_signal_strength,
            latest: Mutex::new(InsightsSummary::empty()),
            metrics: None,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(InstrumentAnalyzer::from_config(config))
            .with_strong_threshold(config.thresholds.strong_signal_strength)
    }

    pub fn with_strong_threshold(mut self, threshold: f64) -> Self {
        self.strong_threshold = threshold;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn analyzer(&self) -> &InstrumentAnalyzer {
        &self.analyzer
    }

    /// Analyze every instrument in batch order and summarize the signals
    pub fn generate_signals(&self, batch: &MarketBatch) -> SignalReport {
        let started = Instant::now();
        let mut signals = Vec::new();

        for series in batch.iter() {
            if !self.analyzer.has_enough_history(series) {
                if let Some(metrics) = &self.metrics {
                    metrics.instruments_skipped_total.inc();
                }
                continue;
            }
            signals.extend(self.analyzer.analyze(series));
        }

        let insights = InsightsSummary::from_signals(&signals, self.strong_threshold);
        *self.latest.lock().unwrap_or_else(|e| e.into_inner()) = insights.clone();

        if let Some(metrics) = &self.metrics {
            for signal in &signals {
                metrics
                    .signals_generated_total
                    .with_label_values(&[signal.strategy.as_str(), signal.signal_type.as_str()])
                    .inc();
            }
            metrics.aggregation_runs_total.inc();
            metrics
                .aggregation_duration_seconds
                .observe(started.elapsed().as_secs_f64());
        }

        info!(
            instruments = batch.len(),
            total = insights.total_signals,
            buy = insights.buy_signals,
            sell = insights.sell_signals,
            strong = insights.strong_signals,
            sentiment = %insights.market_sentiment,
            "generated {} signals across {} instruments",
            insights.total_signals,
            batch.len()
        );

        SignalReport { signals, insights }
    }

    /// Summary of the most recent aggregation with a fresh timestamp.
    /// Does not recompute anything.
    pub fn insights(&self) -> InsightsSummary {
        self.latest
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .refreshed()
    }
}

impl Default for SignalAggregator {
    fn default() -> Self {
        Self::new(InstrumentAnalyzer::new())
    }
}
