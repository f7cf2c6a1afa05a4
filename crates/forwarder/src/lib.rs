// Path: crates/forwarder/src/lib.rs
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

//! # Cosmos gRPC Forwarder
//!
//! A gateway that serves `api.cosmos.forwarder.v1.Service` and relays every
//! call to a Cosmos SDK node's `cosmos.base.tendermint.v1beta1.Service`,
//! remapping messages between the two schemas.
//!
//! Inbound calls flow through the [`server`] (inbound layers), the
//! [`handler`] (translation), the [`interceptor`] chain (logging, metrics)
//! and finally the [`upstream`] connection.

pub mod config;
pub mod error;
pub mod handler;
pub mod interceptor;
pub mod serializer;
pub mod server;
pub mod upstream;

pub use config::ForwarderConfig;
pub use error::{GatewayError, SerializeError, UpstreamError};
pub use handler::{ForwardingHandler, ForwarderService, QueryForwarder};
pub use interceptor::{LoggingInterceptor, MetricsInterceptor, UnaryCall, UnaryInterceptor};
pub use serializer::JsonConverter;
pub use server::{GatewayServer, ServerSettings, ServerState};
pub use upstream::{UpstreamConnection, UpstreamOptions};

use forwarder_telemetry::CallLogSink;
use std::sync::Arc;

/// Wires the production handler: one upstream connection with the standard
/// interceptor chain reporting to `sink`.
///
/// Must be called from within a tokio runtime.
pub fn forwarding_handler(
    config: &ForwarderConfig,
    converter: JsonConverter,
    sink: Arc<dyn CallLogSink>,
) -> Result<ForwardingHandler, GatewayError> {
    let upstream = UpstreamConnection::new(
        &config.cosmos_sdk_grpc_endpoint,
        interceptor::production_chain(converter, sink),
        config.upstream_options(),
    )?;
    Ok(ForwardingHandler::new(Arc::new(upstream)))
}
