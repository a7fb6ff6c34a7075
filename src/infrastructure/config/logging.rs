//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{EnvFilter, fmt};

/// Error returned when a global subscriber is already installed.
pub type LoggingInitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Output format: `pretty` or `json`.
    pub format: String,
}

impl LoggingConfig {
    /// Returns true if events should be written as JSON lines.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// Installs the global tracing subscriber for this configuration.
    ///
    /// # Errors
    ///
    /// Fails if a global subscriber has already been set.
    pub fn init(&self) -> Result<(), LoggingInitError> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        if self.is_json() {
            fmt().json().with_env_filter(filter).try_init()
        } else {
            fmt().with_env_filter(filter).try_init()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pretty_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.is_json());
    }

    #[test]
    fn json_format_is_case_insensitive() {
        let config = LoggingConfig {
            level: "debug".into(),
            format: "JSON".into(),
        };
        assert!(config.is_json());
    }
}
