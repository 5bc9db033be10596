use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Startup configuration failures. All of them are fatal.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
    #[serde(default = "default_co2_factor")]
    pub co2_factor: f64,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_max_connections() -> u32 {
    5
}
fn default_acquire_timeout_secs() -> u64 {
    5
}
fn default_run_migrations() -> bool {
    true
}
fn default_co2_factor() -> f64 {
    domain::measurement::DEFAULT_CO2_FACTOR
}
fn default_static_dir() -> String {
    "src".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: default_host(),
            port: default_port(),
            debug: false,
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            run_migrations: default_run_migrations(),
            co2_factor: default_co2_factor(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigurationError> {
        let s = Config::builder()
            // Optional local file, e.g. config/server.toml
            .add_source(File::with_name(&format!("{}/server", config_dir)).required(false))
            // Environment variables (e.g. PESAJE__PORT=8080)
            .add_source(
                Environment::with_prefix("PESAJE")
                    .separator("__")
                    .try_parsing(true),
            )
            // Plain DATABASE_URL wins over everything else
            .set_override_option("database_url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.validate()
    }

    /// Check required keys and value ranges.
    pub fn validate(self) -> Result<Self, ConfigurationError> {
        match self.database_url.as_deref() {
            Some(url) if !url.trim().is_empty() => {}
            _ => return Err(ConfigurationError::MissingDatabaseUrl),
        }

        if !self.co2_factor.is_finite() || self.co2_factor < 0.0 {
            return Err(ConfigurationError::Invalid(format!(
                "co2_factor must be a finite non-negative number, got {}",
                self.co2_factor
            )));
        }

        if self.max_connections == 0 {
            return Err(ConfigurationError::Invalid(
                "max_connections must be at least 1".to_string(),
            ));
        }

        Ok(self)
    }

    /// Apply command-line overrides on top of the loaded sources.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>, debug: bool) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self.debug |= debug;
        self
    }

    /// Connection string; only call after `validate`.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or_default()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default tracing filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info,pesaje_server=debug"
        }
    }
}
