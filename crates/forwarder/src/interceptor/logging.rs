// Path: crates/forwarder/src/interceptor/logging.rs
use super::{code_name, Next, Reply, UnaryCall, UnaryInterceptor};
use crate::serializer::{JsonConverter, Payload};
use forwarder_telemetry::{CallError, CallLogRecord, CallLogSink};
use std::{sync::Arc, time::Instant};
use tonic::{Code, Status};

/// Emits exactly one [`CallLogRecord`] per call: method, request, response,
/// error and wall-clock duration in seconds.
///
/// The converter and sink are injected; nothing here touches process-wide
/// state. Rendering failures are reported as warnings and never affect the
/// call's outcome.
#[derive(Debug, Clone)]
pub struct LoggingInterceptor {
    converter: JsonConverter,
    sink: Arc<dyn CallLogSink>,
}

impl LoggingInterceptor {
    pub fn new(converter: JsonConverter, sink: Arc<dyn CallLogSink>) -> Self {
        Self { converter, sink }
    }

    fn render(&self, method: &str, what: &'static str, value: Option<&dyn Payload>) -> String {
        match self.converter.marshal(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(
                    target: "upstream",
                    %method,
                    part = what,
                    error = %e,
                    "failed to render message for call log"
                );
                "null".to_string()
            }
        }
    }

    fn emit(&self, call: UnaryCall<'_>, start: Instant, outcome: Result<&Reply, &Status>) {
        let duration_secs = start.elapsed().as_secs_f64();
        let request = self.render(call.method, "request", Some(call.request));
        let (response, error) = match outcome {
            Ok(reply) => (self.render(call.method, "response", Some(&**reply)), None),
            Err(status) => (
                "null".to_string(),
                Some(CallError {
                    code: code_name(status.code()).to_string(),
                    message: status.message().to_string(),
                }),
            ),
        };
        self.sink.record(CallLogRecord {
            method: call.method.to_string(),
            request,
            response,
            error,
            duration_secs,
        });
    }
}

/// Emits a `Cancelled` record if the call future is dropped before completing.
struct InFlight<'i, 'c> {
    interceptor: &'i LoggingInterceptor,
    call: UnaryCall<'c>,
    start: Instant,
    finished: bool,
}

impl InFlight<'_, '_> {
    fn finish(&mut self, result: &Result<Reply, Status>) {
        self.finished = true;
        self.interceptor
            .emit(self.call, self.start, result.as_ref());
    }
}

impl Drop for InFlight<'_, '_> {
    fn drop(&mut self) {
        if !self.finished {
            let cancelled = Status::new(Code::Cancelled, "call dropped before completion");
            self.interceptor
                .emit(self.call, self.start, Err(&cancelled));
        }
    }
}

#[async_trait::async_trait]
impl UnaryInterceptor for LoggingInterceptor {
    async fn intercept(&self, call: UnaryCall<'_>, next: Next<'_>) -> Result<Reply, Status> {
        let mut in_flight = InFlight {
            interceptor: self,
            call,
            start: Instant::now(),
            finished: false,
        };
        let result = next.run(call).await;
        in_flight.finish(&result);
        result
    }
}
