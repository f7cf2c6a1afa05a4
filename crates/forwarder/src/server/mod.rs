// Path: crates/forwarder/src/server/mod.rs
//! Listener, service registration and graceful shutdown for the public API.

mod inbound;

pub use inbound::{InboundLogging, InboundLoggingLayer};

use crate::config::ForwarderConfig;
use crate::error::GatewayError;
use crate::handler::{ForwarderService, QueryForwarder};
use forwarder_proto::public::service_server::ServiceServer;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::{
    net::TcpListener,
    sync::{oneshot, watch},
};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

/// Lifecycle of a [`GatewayServer`]. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ServerState {
    Created,
    Listening,
    Serving,
    Draining,
    Stopped,
}

/// The subset of configuration the server itself needs.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub name: String,
    pub listen_addr: String,
    /// Upper bound on how long in-flight calls may run once shutdown starts.
    pub drain_timeout: Duration,
}

impl From<&ForwarderConfig> for ServerSettings {
    fn from(config: &ForwarderConfig) -> Self {
        Self {
            name: config.server_name.clone(),
            listen_addr: config.listen_addr(),
            drain_timeout: config.drain_timeout(),
        }
    }
}

/// Serves a [`QueryForwarder`] as `api.cosmos.forwarder.v1.Service`.
pub struct GatewayServer<T> {
    settings: ServerSettings,
    listener: TcpListener,
    local_addr: SocketAddr,
    handler: Arc<T>,
    state: Arc<watch::Sender<ServerState>>,
}

impl<T> std::fmt::Debug for GatewayServer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayServer")
            .field("name", &self.settings.name)
            .field("local_addr", &self.local_addr)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl<T: QueryForwarder> GatewayServer<T> {
    /// Binds the listener. Failing to bind is fatal for the process.
    pub async fn bind(settings: ServerSettings, handler: Arc<T>) -> Result<Self, GatewayError> {
        let (state, _) = watch::channel(ServerState::Created);
        let bind_err = |source| GatewayError::Bind {
            addr: settings.listen_addr.clone(),
            source,
        };
        let listener = TcpListener::bind(settings.listen_addr.as_str())
            .await
            .map_err(bind_err)?;
        let local_addr = listener.local_addr().map_err(bind_err)?;

        state.send_replace(ServerState::Listening);
        tracing::info!(target: "server", name = %settings.name, addr = %local_addr, "listening");

        Ok(Self {
            settings,
            listener,
            local_addr,
            handler,
            state: Arc::new(state),
        })
    }

    /// The address actually bound, which differs from the configured one when port 0 was requested.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// A live view of the lifecycle state.
    pub fn state(&self) -> watch::Receiver<ServerState> {
        self.state.subscribe()
    }

    /// Serves until `shutdown` becomes `true` (or its sender is dropped),
    /// then drains in-flight calls for at most the configured drain timeout.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> Result<(), GatewayError> {
        let Self {
            settings,
            listener,
            handler,
            state,
            ..
        } = self;
        let (drain_started, drain_rx) = oneshot::channel::<()>();

        let signal = {
            let state = state.clone();
            let name = settings.name.clone();
            async move {
                while !*shutdown.borrow() {
                    if shutdown.changed().await.is_err() {
                        break;
                    }
                }
                state.send_replace(ServerState::Draining);
                tracing::info!(target: "server", %name, "draining");
                let _ = drain_started.send(());
            }
        };

        let serve = Server::builder()
            .layer(InboundLoggingLayer)
            .add_service(ServiceServer::new(ForwarderService::new(handler)))
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), signal);
        tokio::pin!(serve);

        state.send_replace(ServerState::Serving);

        let drain_deadline = async {
            match drain_rx.await {
                Ok(()) => tokio::time::sleep(settings.drain_timeout).await,
                Err(_) => std::future::pending::<()>().await,
            }
        };

        let result = tokio::select! {
            res = &mut serve => res.map_err(GatewayError::from),
            _ = drain_deadline => {
                tracing::warn!(
                    target: "server",
                    name = %settings.name,
                    timeout_secs = settings.drain_timeout.as_secs_f64(),
                    "drain deadline elapsed; abandoning in-flight calls"
                );
                Ok(())
            }
        };

        state.send_replace(ServerState::Stopped);
        match &result {
            Ok(()) => tracing::info!(target: "server", name = %settings.name, "stopped"),
            Err(e) => tracing::error!(
                target: "server",
                name = %settings.name,
                error = %e,
                "stopped with error"
            ),
        }
        result
    }
}
