// Path: crates/forwarder/src/interceptor/metrics.rs
use super::{code_name, Next, Reply, UnaryCall, UnaryInterceptor};
use forwarder_telemetry::sinks::{upstream_metrics, UpstreamMetricsSink};
use std::time::Instant;
use tonic::Status;

/// Counts calls by method and status code and observes their latency.
#[derive(Debug, Clone, Copy)]
pub struct MetricsInterceptor {
    sink: &'static dyn UpstreamMetricsSink,
}

impl MetricsInterceptor {
    pub fn new(sink: &'static dyn UpstreamMetricsSink) -> Self {
        Self { sink }
    }
}

impl Default for MetricsInterceptor {
    /// Reports to whatever sink is installed globally, or nowhere.
    fn default() -> Self {
        Self::new(upstream_metrics())
    }
}

/// Records the call on drop; the code stays `Cancelled` unless the call completes.
struct CallTimer<'a> {
    sink: &'static dyn UpstreamMetricsSink,
    method: &'a str,
    start: Instant,
    code: &'static str,
}

impl Drop for CallTimer<'_> {
    fn drop(&mut self) {
        self.sink
            .observe_call_duration(self.method, self.start.elapsed().as_secs_f64());
        self.sink.inc_calls_total(self.method, self.code);
    }
}

#[async_trait::async_trait]
impl UnaryInterceptor for MetricsInterceptor {
    async fn intercept(&self, call: UnaryCall<'_>, next: Next<'_>) -> Result<Reply, Status> {
        let mut timer = CallTimer {
            sink: self.sink,
            method: call.method,
            start: Instant::now(),
            code: "Cancelled",
        };
        let result = next.run(call).await;
        timer.code = match &result {
            Ok(_) => "Ok",
            Err(status) => code_name(status.code()),
        };
        result
    }
}
