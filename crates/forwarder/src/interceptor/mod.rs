// Path: crates/forwarder/src/interceptor/mod.rs
//! The outbound call pipeline.
//!
//! Every call to the upstream node runs through an ordered chain of
//! [`UnaryInterceptor`]s before reaching the network. Chains compose in
//! declaration order: the first interceptor in the list is the outermost one,
//! so it observes the call before and after everything else.

mod logging;
mod metrics;

pub use logging::LoggingInterceptor;
pub use metrics::MetricsInterceptor;

use crate::serializer::{JsonConverter, Payload};
use forwarder_telemetry::CallLogSink;
use futures::future::BoxFuture;
use std::sync::Arc;
use tonic::{Code, Status};

/// The type-erased response travelling back up the chain.
pub type Reply = Box<dyn Payload>;

/// The innermost step of a chain: performs the actual network call.
pub type Terminal<'a> = Box<dyn FnOnce() -> BoxFuture<'a, Result<Reply, Status>> + Send + 'a>;

/// An ordered interceptor chain, shared by every call on a connection.
pub type InterceptorChain = Arc<[Arc<dyn UnaryInterceptor>]>;

/// What an interceptor can see of a call.
#[derive(Clone, Copy)]
pub struct UnaryCall<'a> {
    /// Full method path, e.g. `/cosmos.base.tendermint.v1beta1.Service/GetSyncing`.
    pub method: &'static str,
    pub request: &'a dyn Payload,
}

impl std::fmt::Debug for UnaryCall<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnaryCall")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

/// The remainder of the chain after the current interceptor.
pub struct Next<'a> {
    rest: &'a [Arc<dyn UnaryInterceptor>],
    terminal: Terminal<'a>,
}

impl<'a> Next<'a> {
    pub fn new(chain: &'a [Arc<dyn UnaryInterceptor>], terminal: Terminal<'a>) -> Self {
        Self {
            rest: chain,
            terminal,
        }
    }

    /// Runs the remaining interceptors and then the terminal call.
    pub async fn run(self, call: UnaryCall<'_>) -> Result<Reply, Status> {
        match self.rest.split_first() {
            Some((head, rest)) => {
                head.intercept(
                    call,
                    Next {
                        rest,
                        terminal: self.terminal,
                    },
                )
                .await
            }
            None => (self.terminal)().await,
        }
    }
}

/// Wraps outbound unary calls.
///
/// Implementations must pass the result of [`Next::run`] through unchanged.
#[async_trait::async_trait]
pub trait UnaryInterceptor: Send + Sync + std::fmt::Debug {
    async fn intercept(&self, call: UnaryCall<'_>, next: Next<'_>) -> Result<Reply, Status>;
}

/// The chain every production call runs through: one logging stage
/// (outermost) followed by metrics.
pub fn production_chain(
    converter: JsonConverter,
    sink: Arc<dyn CallLogSink>,
) -> Vec<Arc<dyn UnaryInterceptor>> {
    let logging: Arc<dyn UnaryInterceptor> = Arc::new(LoggingInterceptor::new(converter, sink));
    let metrics: Arc<dyn UnaryInterceptor> = Arc::new(MetricsInterceptor::default());
    vec![logging, metrics]
}

/// Canonical name of a gRPC status code, as used in logs and metric labels.
pub fn code_name(code: Code) -> &'static str {
    match code {
        Code::Ok => "Ok",
        Code::Cancelled => "Cancelled",
        Code::Unknown => "Unknown",
        Code::InvalidArgument => "InvalidArgument",
        Code::DeadlineExceeded => "DeadlineExceeded",
        Code::NotFound => "NotFound",
        Code::AlreadyExists => "AlreadyExists",
        Code::PermissionDenied => "PermissionDenied",
        Code::ResourceExhausted => "ResourceExhausted",
        Code::FailedPrecondition => "FailedPrecondition",
        Code::Aborted => "Aborted",
        Code::OutOfRange => "OutOfRange",
        Code::Unimplemented => "Unimplemented",
        Code::Internal => "Internal",
        Code::Unavailable => "Unavailable",
        Code::DataLoss => "DataLoss",
        Code::Unauthenticated => "Unauthenticated",
    }
}

#[cfg(test)]
mod tests;
