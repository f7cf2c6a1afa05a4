// Path: crates/telemetry/src/prometheus.rs
//! A concrete implementation of the metrics sinks using the Prometheus crate.

use crate::sinks::{UpstreamMetricsSink, SINK};
use once_cell::sync::OnceCell;
use prometheus::{
    exponential_buckets, register_histogram_vec, register_int_counter_vec, HistogramVec,
    IntCounterVec,
};

static UPSTREAM_CALLS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static UPSTREAM_CALL_DURATION_SECONDS: OnceCell<HistogramVec> = OnceCell::new();

#[derive(Debug, Clone, Copy)]
pub struct PrometheusSink;

static PROMETHEUS_SINK: PrometheusSink = PrometheusSink;

impl UpstreamMetricsSink for PrometheusSink {
    fn inc_calls_total(&self, method: &str, code: &str) {
        if let Some(counter) = UPSTREAM_CALLS_TOTAL.get() {
            counter.with_label_values(&[method, code]).inc();
        }
    }

    fn observe_call_duration(&self, method: &str, duration_secs: f64) {
        if let Some(histogram) = UPSTREAM_CALL_DURATION_SECONDS.get() {
            histogram
                .with_label_values(&[method])
                .observe(duration_secs);
        }
    }
}

/// Registers the collectors with the default registry and publishes the sink
/// through [`crate::sinks::upstream_metrics`].
///
/// Calling it again after a successful install is a no-op.
pub fn install() -> Result<&'static dyn UpstreamMetricsSink, prometheus::Error> {
    UPSTREAM_CALLS_TOTAL.get_or_try_init(|| {
        register_int_counter_vec!(
            "forwarder_upstream_calls_total",
            "Total calls forwarded to the upstream node.",
            &["method", "code"]
        )
    })?;
    UPSTREAM_CALL_DURATION_SECONDS.get_or_try_init(|| {
        register_histogram_vec!(
            "forwarder_upstream_call_duration_seconds",
            "Latency of calls forwarded to the upstream node.",
            &["method"],
            exponential_buckets(0.001, 2.0, 15)?
        )
    })?;

    let sink: &'static dyn UpstreamMetricsSink = &PROMETHEUS_SINK;
    Ok(*SINK.get_or_init(|| sink))
}
