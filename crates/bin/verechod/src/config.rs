//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `verecho.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Where the reported version comes from.
    pub version: VersionConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Largest accepted request body, in bytes.
    pub body_limit: usize,
}

/// Version lookup configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Environment variable holding the version, read on every request.
    pub env_var: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `verecho.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if `PORT`
    /// is not a valid port number, or if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("verecho.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides looked up through `lookup` (the process environment
    /// outside of tests). An empty `PORT` counts as unset.
    pub(crate) fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("PORT").filter(|val| !val.is_empty()) {
            self.server.port = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(val))?;
        }
        if let Some(val) = lookup("HOST").filter(|val| !val.is_empty()) {
            self.server.host = val;
        }
        if let Some(val) = lookup("VERECHO_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        let var = &self.version.env_var;
        if var.is_empty() || var.contains(['=', '\0']) {
            return Err(ConfigError::Validation(format!(
                "invalid version variable name {var:?}"
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            body_limit: verecho_adapter_http_axum::router::DEFAULT_BODY_LIMIT,
        }
    }
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            env_var: verecho_adapter_env::DEFAULT_VERSION_VAR.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "verechod=info,verecho=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// `PORT` is set but is not a port number.
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
