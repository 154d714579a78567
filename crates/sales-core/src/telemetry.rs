//! Logging initialization.
//!
//! Library code in this workspace only emits `tracing` events. Binaries and
//! test harnesses that want to see them call [`init_logging`] once at
//! startup.

use crate::{SalesError, SalesResult};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_level")]
    pub level: String,

    /// Log format (pretty, json).
    #[serde(default = "default_format")]
    pub format: String,

    /// Include the event target in each line.
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

fn default_with_target() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            with_target: default_with_target(),
        }
    }
}

impl LoggingConfig {
    /// Builds the filter directive, honouring `RUST_LOG` when it is set.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{},sales={},sqlx=warn", self.level, self.level))
        })
    }

    /// Returns true when JSON output is requested.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Installs the global `tracing` subscriber.
///
/// Fails with [`SalesError::Internal`] if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> SalesResult<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let result = if config.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(config.with_target),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(config.with_target))
            .try_init()
    };

    result.map_err(|e| SalesError::internal(format!("Failed to install subscriber: {}", e)))?;

    tracing::info!(
        level = %config.level,
        format = %config.format,
        "Logging initialized"
    );

    Ok(())
}
