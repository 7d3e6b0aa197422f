//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden from the
//! command line, and validated before the server starts. With nothing set the
//! service listens on `0.0.0.0:8080`.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

use crate::cli::Cli;

/// Bind address used when `LISTEN` is not set.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            log_level,
            log_format,
        }
    }

    /// Replaces values with those given on the command line.
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(listen) = &cli.listen {
            self.listen_addr = listen.clone();
        }
        if let Some(log_format) = &cli.log_format {
            self.log_format = log_format.clone();
        }
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let port = self
            .listen_addr
            .rsplit_once(':')
            .map(|(_, port)| port)
            .unwrap_or_default();
        if port.parse::<u16>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Returns whether logs are emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads, overrides and validates configuration.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(cli: &Cli) -> Result<Config> {
    let config = Config::from_env().with_cli_overrides(cli);
    config.validate()?;
    Ok(config)
}
