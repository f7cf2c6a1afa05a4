// Path: crates/forwarder/src/server/inbound.rs
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Inbound stage that runs before every public call reaches the handler.
///
/// Currently a pass-through: requests and responses are not inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct InboundLoggingLayer;

impl<S> Layer<S> for InboundLoggingLayer {
    type Service = InboundLogging<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InboundLogging { inner }
    }
}

#[derive(Debug, Clone)]
pub struct InboundLogging<S> {
    inner: S,
}

impl<S, R> Service<R> for InboundLogging<S>
where
    S: Service<R>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: R) -> Self::Future {
        self.inner.call(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use tower::{service_fn, ServiceExt};

    #[tokio::test]
    async fn test_layer_passes_requests_through() {
        let inner = service_fn(|req: u32| async move { Ok::<_, Infallible>(req * 2) });
        let svc = InboundLoggingLayer.layer(inner);
        assert_eq!(svc.oneshot(21).await.unwrap(), 42);
    }
}
