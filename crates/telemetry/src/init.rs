// Path: crates/telemetry/src/init.rs
use std::{fmt, str::FromStr};
use tracing_subscriber::{fmt as tfmt, layer::SubscriberExt, EnvFilter, Registry};

/// Output encoding for log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "plain" => Ok(Self::Text),
            other => Err(format!("unknown log format '{other}' (expected json or text)")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Initializes the global `tracing` subscriber.
///
/// `RUST_LOG`, when set, takes precedence over `level`. Records go to stderr
/// with RFC 3339 UTC timestamps in the requested `format`.
pub fn init_tracing(level: &str, format: LogFormat) -> Result<(), anyhow::Error> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };

    let json_layer = (format == LogFormat::Json).then(|| {
        tfmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(tfmt::time::UtcTime::rfc_3339())
    });
    let text_layer = (format == LogFormat::Text).then(|| {
        tfmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(tfmt::time::UtcTime::rfc_3339())
    });

    let subscriber = Registry::default()
        .with(filter)
        .with(json_layer)
        .with(text_layer);
    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
