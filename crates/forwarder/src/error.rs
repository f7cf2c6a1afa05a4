// Path: crates/forwarder/src/error.rs
//! Error types for the forwarder.

use thiserror::Error;
use tonic::Status;

/// Fatal errors raised while assembling or running the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// A configuration value is missing or malformed.
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// The upstream endpoint could not be turned into a channel.
    #[error("Invalid upstream endpoint '{endpoint}': {reason}")]
    Endpoint { endpoint: String, reason: String },
    /// The listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    /// The gRPC server failed while serving.
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
    /// Logging or metrics could not be initialized.
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

/// A failure reported by the upstream node.
///
/// Wraps the upstream status unmodified; converting it back yields the very
/// same status for the public caller.
#[derive(Error, Debug, Clone)]
#[error("upstream call failed: {0}")]
pub struct UpstreamError(pub Status);

impl UpstreamError {
    pub fn status(&self) -> &Status {
        &self.0
    }
}

impl From<Status> for UpstreamError {
    fn from(status: Status) -> Self {
        Self(status)
    }
}

impl From<UpstreamError> for Status {
    fn from(err: UpstreamError) -> Self {
        err.0
    }
}

/// A value could not be rendered as JSON for a call log.
#[derive(Error, Debug)]
#[error("failed to serialize message: {0}")]
pub struct SerializeError(#[from] pub serde_json::Error);
