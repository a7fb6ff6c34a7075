//! Application settings loading.
//!
//! Settings come from an optional TOML file overlaid with
//! `TRANSFER_MARKET__*` environment variables, where `__` separates nested
//! keys (`TRANSFER_MARKET__DATABASE__URL`, `TRANSFER_MARKET__SERVER__PORT`).
//! Every field has a default, so an empty environment yields a server on
//! `0.0.0.0:8080` backed by the in-memory store.
//!
//! # Example
//!
//! ```no_run
//! use transfer_market::infrastructure::config::Settings;
//!
//! let settings = Settings::load(Some("config/transfer-market.toml")).unwrap();
//! println!("listening on {}", settings.server.bind_address());
//! ```

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

use super::logging::LoggingConfig;

/// Default settings file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/transfer-market";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "TRANSFER_MARKET";

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Backing store.
    pub database: DatabaseConfig,
    /// Tracing output.
    pub logging: LoggingConfig,
}

impl Settings {
    /// Loads settings from `path` (optional file, extension inferred) and the
    /// environment.
    ///
    /// When `path` is `None` the default `config/transfer-market.*` is tried.
    ///
    /// # Errors
    ///
    /// Returns `config::ConfigError` if a present file or an environment value
    /// cannot be parsed into the expected type.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(File::with_name(path.unwrap_or(DEFAULT_CONFIG_PATH)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parses settings from TOML text, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns `config::ConfigError` if the text is not valid settings TOML.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl ServerConfig {
    /// Returns `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

/// Database settings.
///
/// Without a `url` the server runs on the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string.
    pub url: Option<String>,
    /// Pool size.
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection.
    pub acquire_timeout_secs: u64,
    /// Create the schema on startup.
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Returns the pool acquire timeout.
    #[must_use]
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            acquire_timeout_secs: 5,
            run_migrations: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.server.bind_address(), "0.0.0.0:8080");
        assert!(settings.database.url.is_none());
        assert_eq!(settings.database.acquire_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [server]
            port = 9090

            [database]
            url = "postgres://market@localhost/market"
            run_migrations = false

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9090);
        assert_eq!(
            settings.database.url.as_deref(),
            Some("postgres://market@localhost/market")
        );
        assert_eq!(settings.database.max_connections, 10);
        assert!(!settings.database.run_migrations);
        assert!(settings.logging.is_json());
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = Settings::from_toml_str("[server]\nport = \"eighty\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let settings = Settings::load(Some("config/does-not-exist")).unwrap();
        assert_eq!(settings.server.port, Settings::default().server.port);
    }
}
