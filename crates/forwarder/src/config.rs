// Path: crates/forwarder/src/config.rs
//! Runtime configuration, read once at startup from flags or the environment.

use crate::error::GatewayError;
use clap::Parser;
use forwarder_telemetry::LogFormat;
use std::{net::SocketAddr, time::Duration};

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "forwarder",
    about = "Relays Cosmos SDK node queries through a stable gRPC schema"
)]
pub struct ForwarderConfig {
    /// Interface the public gRPC server binds to.
    #[clap(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub server_host: String,

    #[clap(long, env = "SERVER_PORT", default_value_t = 9090)]
    pub server_port: u16,

    /// Name reported in lifecycle logs.
    #[clap(long, env = "SERVER_NAME", default_value = "cosmos-grpc-forwarder")]
    pub server_name: String,

    /// Upstream node query endpoint, `host:port` or `http://host:port`.
    #[clap(long, env = "COSMOS_SDK_GRPC_ENDPOINT")]
    pub cosmos_sdk_grpc_endpoint: String,

    #[clap(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// `json` or `text`.
    #[clap(long, env = "LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,

    #[clap(long, env = "UPSTREAM_CONNECT_TIMEOUT_SECS")]
    pub upstream_connect_timeout_secs: Option<u64>,

    /// Per-call deadline applied to every upstream request.
    #[clap(long, env = "UPSTREAM_CALL_TIMEOUT_SECS")]
    pub upstream_call_timeout_secs: Option<u64>,

    /// How long in-flight calls may run after shutdown is requested.
    #[clap(long, env = "SHUTDOWN_DRAIN_SECS", default_value_t = 30)]
    pub shutdown_drain_secs: u64,

    /// Optional listener for `/metrics`, `/healthz` and `/readyz`.
    #[clap(long, env = "TELEMETRY_ADDR")]
    pub telemetry_addr: Option<SocketAddr>,
}

impl ForwarderConfig {
    /// Address string the public server binds to.
    pub fn listen_addr(&self) -> String {
        if self.server_host.contains(':') && !self.server_host.starts_with('[') {
            format!("[{}]:{}", self.server_host, self.server_port)
        } else {
            format!("{}:{}", self.server_host, self.server_port)
        }
    }

    pub fn drain_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_drain_secs)
    }

    pub fn upstream_options(&self) -> crate::upstream::UpstreamOptions {
        crate::upstream::UpstreamOptions {
            connect_timeout: self.upstream_connect_timeout_secs.map(Duration::from_secs),
            call_timeout: self.upstream_call_timeout_secs.map(Duration::from_secs),
            ..Default::default()
        }
    }

    /// Rejects values clap cannot check on its own.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.cosmos_sdk_grpc_endpoint.trim().is_empty() {
            return Err(GatewayError::Config(
                "COSMOS_SDK_GRPC_ENDPOINT must not be empty".into(),
            ));
        }
        if self.server_host.trim().is_empty() {
            return Err(GatewayError::Config("SERVER_HOST must not be empty".into()));
        }
        if self.upstream_call_timeout_secs == Some(0) {
            return Err(GatewayError::Config(
                "UPSTREAM_CALL_TIMEOUT_SECS must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
