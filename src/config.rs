//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_LENGTH` - Hash length when none is requested (default: 10)
//! - `MAX_LENGTH` - Upper bound for requested hash lengths (default: 1024)
//! - `CORS_ENABLED` - Attach permissive CORS headers (default: `true`)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8787"
//! export DEFAULT_LENGTH=8
//! ```

use anyhow::Result;
use std::env;

/// Largest value accepted for `MAX_LENGTH`.
pub const MAX_LENGTH_CEILING: u32 = 65_536;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Length used when neither the path nor the query carries a valid one.
    pub default_length: u32,
    /// Requested lengths above this are clamped down to it.
    pub max_length: u32,
    pub cors_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_length: 10,
            max_length: 1024,
            cors_enabled: true,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let default_length = env::var("DEFAULT_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.default_length);

        let max_length = env::var("MAX_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_length);

        let cors_enabled = env::var("CORS_ENABLED")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.cors_enabled);

        Self {
            listen_addr,
            log_level,
            log_format,
            default_length,
            max_length,
            cors_enabled,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - lengths are outside `1 <= DEFAULT_LENGTH <= MAX_LENGTH <= 65536`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.default_length == 0 {
            anyhow::bail!("DEFAULT_LENGTH must be greater than 0");
        }

        if self.max_length > MAX_LENGTH_CEILING {
            anyhow::bail!(
                "MAX_LENGTH is too large (max: {}), got {}",
                MAX_LENGTH_CEILING,
                self.max_length
            );
        }

        if self.default_length > self.max_length {
            anyhow::bail!(
                "DEFAULT_LENGTH ({}) must not exceed MAX_LENGTH ({})",
                self.default_length,
                self.max_length
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Default length: {}", self.default_length);
        tracing::info!("  Max length: {}", self.max_length);
        tracing::info!(
            "  CORS: {}",
            if self.cors_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
