//! Metrics setup and update for our provider.

use prometheus::core::{AtomicU64, GenericCounter};

#[derive(Debug, Clone)]
pub struct Metrics {
    pub query_total: GenericCounter<AtomicU64>,
    pub query_error_total: GenericCounter<AtomicU64>,
    pub features_returned_total: GenericCounter<AtomicU64>,
}

impl Metrics {
    /// Set up counters and gauges used to produce Prometheus metrics
    pub fn initialize(metrics_registry: &mut prometheus::Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "geoservice_query_total",
            "Total successful queries.",
        )?;

        let query_error_total = add_int_counter_metric(
            metrics_registry,
            "geoservice_query_error_total",
            "Total queries that ended in an error.",
        )?;

        let features_returned_total = add_int_counter_metric(
            metrics_registry,
            "geoservice_features_returned_total",
            "Total features returned to callers.",
        )?;

        Ok(Self {
            query_total,
            query_error_total,
            features_returned_total,
        })
    }

    pub fn record_success(&self, features: usize) {
        self.query_total.inc();
        self.features_returned_total
            .inc_by(u64::try_from(features).unwrap_or(u64::MAX));
    }

    pub fn record_error(&self) {
        self.query_error_total.inc();
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericCounter<AtomicU64>, prometheus::Error> {
    let int_counter =
        prometheus::IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}
