//! Configuration module for the names API.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it before the server starts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use names_api::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! println!("HTTP port: {}", config.server.http_port);
//! ```
//!
//! # Example
//!
//! ```yaml
//! server:
//!   http_port: ${HTTP_PORT:-8000}
//! persistence:
//!   backend: turso
//!   db_path: ${NAMES_DB_PATH:-./data/names.db}
//! observability:
//!   logging:
//!     level: info
//!     format: json
//! ```

mod observability;
mod persistence;
mod server;

use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig};
pub use persistence::{PersistenceConfig, StorageBackend};
pub use server::ServerConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "NAMES_API_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Record persistence configuration.
    #[serde(default)]
    pub persistence: PersistenceConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Socket address the HTTP server binds to.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the bind address is not a valid IP.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.bind_address, self.server.http_port)
            .parse()
            .map_err(|e| {
                ConfigError::ValidationError(format!(
                    "invalid bind_address '{}': {e}",
                    self.server.bind_address
                ))
            })
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration the way the binary does.
///
/// An explicit `path` must exist. Without one, `config.yaml` is used when
/// present and built-in defaults otherwise.
///
/// # Errors
///
/// Returns a `ConfigError` if a chosen file cannot be loaded or the
/// resulting configuration is invalid.
pub fn load_config_or_default(path: Option<&str>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(Some(path)),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(None),
        None => {
            let config = Config::default();
            validate_config(&config)?;
            Ok(config)
        }
    }
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |caps: &regex::Captures<'_>| {
        let default_value = caps.get(2).map(|m| m.as_str());
        match std::env::var(&caps[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.http_port == 0 {
        return Err(ConfigError::ValidationError(
            "server.http_port must be non-zero".to_string(),
        ));
    }

    config.socket_addr()?;

    if config.persistence.backend == StorageBackend::Turso
        && config.persistence.db_path.trim().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "persistence.db_path is required for the turso backend".to_string(),
        ));
    }

    if config.observability.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "observability.logging.level must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.http_port, 8000);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.persistence.backend, StorageBackend::Turso);
        assert_eq!(config.persistence.db_path, "./data/names.db");
        assert_eq!(config.observability.logging.level, "info");
        assert_eq!(config.observability.logging.format, LogFormat::Pretty);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = match load_config_from_string("{}") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config.server.http_port, 8000);
    }

    #[test]
    fn test_load_full_config() {
        let yaml = r"
server:
  bind_address: 127.0.0.1
  http_port: 9000
persistence:
  backend: memory
observability:
  logging:
    level: debug
    format: json
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load config: {e}"),
        };
        assert_eq!(config.persistence.backend, StorageBackend::Memory);
        assert_eq!(config.observability.logging.format, LogFormat::Json);
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:9000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "db_path: ${NAMES_CONFIG_TEST_NONEXISTENT_VAR:-./data/x.db}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "db_path: ./data/x.db");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_with_default_uses_existing() {
        // PATH should always exist
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "level: ${NAMES_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "level: ");
    }

    #[test]
    fn test_validation_zero_port() {
        let yaml = r"
server:
  http_port: 0
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero port");
        };
        assert!(err.to_string().contains("http_port"));
    }

    #[test]
    fn test_validation_bad_bind_address() {
        let yaml = r"
server:
  bind_address: not-an-ip
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for bad bind address");
        };
        assert!(err.to_string().contains("bind_address"));
    }

    #[test]
    fn test_validation_turso_requires_path() {
        let yaml = r#"
persistence:
  backend: turso
  db_path: ""
"#;

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for empty db_path");
        };
        assert!(err.to_string().contains("db_path"));
    }

    #[test]
    fn test_memory_backend_ignores_path() {
        let yaml = r#"
persistence:
  backend: memory
  db_path: ""
"#;

        assert!(load_config_from_string(yaml).is_ok());
    }

    #[test]
    fn test_unknown_backend_is_parse_error() {
        let yaml = r"
persistence:
  backend: postgres
";

        assert!(matches!(
            load_config_from_string(yaml),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "server:\n  http_port: 8123\n").unwrap();

        let config = load_config(path.to_str()).unwrap();

        assert_eq!(config.server.http_port, 8123);
    }

    #[test]
    fn test_missing_explicit_file_is_read_error() {
        let result = load_config_or_default(Some("/nonexistent/names-api.yaml"));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
