// Path: crates/forwarder/src/bin/forwarder.rs
use anyhow::{Context, Result};
use clap::Parser;
use cosmos_grpc_forwarder::{
    forwarding_handler, ForwarderConfig, GatewayError, GatewayServer, JsonConverter,
    ServerSettings, ServerState,
};
use forwarder_telemetry::{http, init::init_tracing, prometheus, TracingCallLogSink};
use std::sync::Arc;
use tokio::sync::watch;

/// Resolves on Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
                return;
            }
            Err(e) => {
                tracing::warn!(
                    target: "forwarder",
                    error = %e,
                    "SIGTERM handler unavailable; relying on Ctrl+C"
                );
            }
        }
    }
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(target: "forwarder", error = %e, "Failed to install CTRL+C handler");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ForwarderConfig::parse();
    config.validate()?;

    init_tracing(&config.log_level, config.log_format)
        .map_err(|e| GatewayError::Telemetry(e.to_string()))?;
    tracing::info!(
        target: "forwarder",
        event = "startup",
        name = %config.server_name,
        upstream = %config.cosmos_sdk_grpc_endpoint,
        listen = %config.listen_addr()
    );

    prometheus::install().map_err(|e| GatewayError::Telemetry(e.to_string()))?;

    let sink = Arc::new(TracingCallLogSink);
    let handler = forwarding_handler(&config, JsonConverter::new(), sink)
        .context("creating upstream connection")?;
    let settings = ServerSettings::from(&config);
    let server = GatewayServer::bind(settings, Arc::new(handler)).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    if let Some(addr) = config.telemetry_addr {
        let (ready_tx, ready_rx) = watch::channel(false);
        let mut states = server.state();
        tokio::spawn(async move {
            loop {
                let serving = *states.borrow_and_update() == ServerState::Serving;
                let _ = ready_tx.send(serving);
                if states.changed().await.is_err() {
                    break;
                }
            }
        });
        let telemetry_shutdown = shutdown_rx.clone();
        tokio::spawn(async move {
            let served = http::run_server(addr, ready_rx, telemetry_shutdown).await;
            if let Err(e) = served {
                tracing::error!(target: "telemetry", error = %e, "telemetry endpoint exited");
            }
        });
    }

    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!(target: "forwarder", "shutdown requested");
        let _ = shutdown_tx.send(true);
    });

    server.run(shutdown_rx).await?;
    Ok(())
}
