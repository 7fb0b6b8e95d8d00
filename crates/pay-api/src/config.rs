//! # Configuration
//!
//! Application configuration, layered from built-in defaults, an optional
//! TOML file and environment variables (highest precedence).
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! environment = "production"
//!
//! [payment]
//! default = "stripe"
//! ```
//!
//! Environment overrides: `HOST`, `PORT`, `ENVIRONMENT`, `PAYMENT_DEFAULT`.

use pay_core::{CheckoutError, CheckoutResult, DEFAULT_PROVIDER_ID};
use serde::Deserialize;
use std::net::SocketAddr;

/// Locations searched for the config file, relative to the working directory
pub const CONFIG_PATHS: [&str; 3] = [
    "config/gateway.toml",
    "../config/gateway.toml",
    "../../config/gateway.toml",
];

/// Contents of `config/gateway.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub payment: PaymentSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentSection {
    /// Provider used when a checkout does not name one
    pub default: Option<String>,
}

impl FileConfig {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> CheckoutResult<Self> {
        toml::from_str(content).map_err(|e| CheckoutError::Configuration(e.to_string()))
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Default payment provider id
    pub default_provider: String,
}

impl AppConfig {
    /// Load from `.env`, the config file (if any) and the process environment
    pub fn load() -> CheckoutResult<Self> {
        dotenvy::dotenv().ok();

        let file = load_config_file()?;
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed config file with an environment lookup
    pub fn from_sources<F>(file: FileConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let lookup = |key: &str| env(key).filter(|v| !v.is_empty());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT value: {}", raw);
                file.server.port.unwrap_or(defaults.port)
            }),
            None => file.server.port.unwrap_or(defaults.port),
        };

        Self {
            host: lookup("HOST")
                .or(file.server.host)
                .unwrap_or(defaults.host),
            port,
            environment: lookup("ENVIRONMENT")
                .or(file.server.environment)
                .unwrap_or(defaults.environment),
            default_provider: lookup("PAYMENT_DEFAULT")
                .or(file.payment.default)
                .unwrap_or(defaults.default_provider),
        }
    }

    /// Builder: set the default provider
    pub fn with_default_provider(mut self, provider_id: impl Into<String>) -> Self {
        self.default_provider = provider_id.into();
        self
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> CheckoutResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                CheckoutError::Configuration(format!(
                    "Invalid socket address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: "development".to_string(),
            default_provider: DEFAULT_PROVIDER_ID.to_string(),
        }
    }
}

/// Read the first config file found, or an empty config if there is none
fn load_config_file() -> CheckoutResult<FileConfig> {
    for path in CONFIG_PATHS {
        if let Ok(content) = std::fs::read_to_string(path) {
            let file = FileConfig::from_toml(&content).map_err(|e| {
                CheckoutError::Configuration(format!("Failed to parse {}: {}", path, e))
            })?;
            tracing::info!("Loaded configuration from {}", path);
            return Ok(file);
        }
    }

    tracing::debug!("No config file found, using defaults and environment");
    Ok(FileConfig::default())
}
