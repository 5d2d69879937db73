//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and resolves the listen
//! port from the command line, the environment, and the file, in that order
//! of precedence. Every field has a default, so the service also runs with no
//! config file at all.

use serde::Deserialize;
use std::path::Path;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "welcome_service=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default HTTP listen host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default HTTP listen port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Environment variable consulted for a port override
pub const PORT_ENV_VAR: &str = "PORT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration, falling back to built-in defaults when the file
    /// does not exist. A file that exists but fails to parse is still an
    /// error: a typo in deployed configuration must not silently vanish.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Resolve the effective listen port.
///
/// Precedence: `--port` flag, then the `PORT` environment variable, then the
/// value from the config file (or its default).
pub fn resolve_port(
    flag: Option<u16>,
    env: Option<&str>,
    file: u16,
) -> Result<u16, ConfigError> {
    if let Some(port) = flag {
        return Ok(port);
    }
    if let Some(value) = env {
        return value.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "Invalid {} value '{}': expected a port number",
                PORT_ENV_VAR, value
            ))
        });
    }
    Ok(file)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load_or_default("does/not/exist.toml").unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn loads_values_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nhost = \"127.0.0.1\"\nport = 9090").unwrap();
        writeln!(file, "[logging]\nformat = \"json\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nformat = \"json\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "http = [").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn flag_takes_precedence_over_env_and_file() {
        let port = resolve_port(Some(9999), Some("7070"), 8080).unwrap();
        assert_eq!(port, 9999);
    }

    #[test]
    fn env_takes_precedence_over_file() {
        let port = resolve_port(None, Some("7070"), 8080).unwrap();
        assert_eq!(port, 7070);
    }

    #[test]
    fn file_value_used_without_overrides() {
        let port = resolve_port(None, None, 8081).unwrap();
        assert_eq!(port, 8081);
    }

    #[test]
    fn unparseable_env_port_is_an_error() {
        let err = resolve_port(None, Some("banana"), 8080).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
