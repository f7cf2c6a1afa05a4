// Path: crates/telemetry/src/sinks.rs
//! Defines abstract sinks for per-call records and metrics, decoupling the
//! forwarding pipeline from the logging and metrics backends.

use once_cell::sync::OnceCell;

// --- Static Sink Access ---

/// A no-op sink for use in tests or when telemetry is disabled.
#[derive(Debug, Clone, Copy)]
pub struct NopSink;

/// A lazily-initialized static reference to the global metrics sink.
pub static SINK: OnceCell<&'static dyn UpstreamMetricsSink> = OnceCell::new();
static NOP_SINK: NopSink = NopSink;

/// Returns a static reference to the configured upstream metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn upstream_metrics() -> &'static dyn UpstreamMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

// --- Call records ---

/// The error half of a failed call, as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallError {
    /// Canonical gRPC status code name, e.g. `NotFound`.
    pub code: String,
    pub message: String,
}

/// One record per outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallLogRecord {
    /// Full method path, e.g. `/cosmos.base.tendermint.v1beta1.Service/GetSyncing`.
    pub method: String,
    /// JSON rendering of the request, or `null` if it could not be rendered.
    pub request: String,
    /// JSON rendering of the response, or `null` on failure.
    pub response: String,
    pub error: Option<CallError>,
    pub duration_secs: f64,
}

/// Receives the record produced for every outbound call.
pub trait CallLogSink: Send + Sync + std::fmt::Debug {
    fn record(&self, record: CallLogRecord);
}

impl CallLogSink for NopSink {
    fn record(&self, _record: CallLogRecord) {}
}

/// Emits call records as `tracing` events: `info` on success, `warn` on error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCallLogSink;

impl CallLogSink for TracingCallLogSink {
    fn record(&self, record: CallLogRecord) {
        match &record.error {
            None => tracing::info!(
                target: "upstream",
                method = %record.method,
                request = %record.request,
                response = %record.response,
                duration = record.duration_secs,
                "outgoing gRPC request"
            ),
            Some(err) => tracing::warn!(
                target: "upstream",
                method = %record.method,
                request = %record.request,
                response = %record.response,
                error.code = %err.code,
                error.message = %err.message,
                duration = record.duration_secs,
                "outgoing gRPC request"
            ),
        }
    }
}

// --- Metrics ---

/// A sink for metrics about calls made to the upstream node.
pub trait UpstreamMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments the call counter, labeled by method and status code name.
    fn inc_calls_total(&self, method: &str, code: &str);
    /// Observes the latency of one call, labeled by method.
    fn observe_call_duration(&self, method: &str, duration_secs: f64);
}

impl UpstreamMetricsSink for NopSink {
    fn inc_calls_total(&self, _method: &str, _code: &str) {}
    fn observe_call_duration(&self, _method: &str, _duration_secs: f64) {}
}
