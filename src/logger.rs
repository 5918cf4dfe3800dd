//! Logging bootstrap built on tracing / tracing-subscriber.
//!
//! The logger is configured from [`LoggerSettings`]: a level filter (which
//! `RUST_LOG` can still override), an output format, and whether console
//! output is colored.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::config::LoggerSettings;
use crate::config::error::ConfigError;

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable output
    Pretty,
    /// Single-line human-readable output
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "full" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: pretty, compact, json",
                    s
                ),
            }),
        }
    }
}

/// Initializes the global tracing subscriber from logger settings.
///
/// `RUST_LOG` takes precedence over the configured level when set, so a
/// single run can be made more verbose without touching configuration.
///
/// # Errors
///
/// Returns an error when the level filter cannot be parsed or when a
/// global subscriber is already installed.
pub fn init_logger(settings: &LoggerSettings) -> anyhow::Result<()> {
    let format: LogFormat = settings.format.parse()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {}", settings.level, e))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(settings.colored);

    match format {
        LogFormat::Pretty => builder
            .pretty()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?,
        LogFormat::Compact => builder
            .compact()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?,
        LogFormat::Json => builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?,
    }

    Ok(())
}
