// Path: crates/telemetry/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Forwarder Telemetry
//!
//! Observability infrastructure for the forwarder: structured logging
//! initialization, the sink that receives one record per outbound call, a
//! Prometheus metrics backend and a small HTTP endpoint exposing it.

/// A lightweight HTTP server for exposing `/metrics`, `/healthz`, and `/readyz` endpoints.
pub mod http;
/// The initialization routine for global structured logging.
pub mod init;
/// The concrete implementation of metrics sinks using the `prometheus` crate.
pub mod prometheus;
/// Call-log records and the sinks (`CallLogSink`, `UpstreamMetricsSink`) that consume them.
pub mod sinks;

pub use init::LogFormat;
pub use sinks::{upstream_metrics, CallError, CallLogRecord, CallLogSink, TracingCallLogSink};

#[cfg(test)]
mod tests;
