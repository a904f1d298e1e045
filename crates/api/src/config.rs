//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Slotbook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `SLOTBOOK_MAX_HORIZON_DAYS`: Longest date range the calendar endpoint
//!   will enumerate (default: 60)
//! - `SLOTBOOK_SLOT_CACHE_CAPACITY`: Number of windows whose slot lists are
//!   kept in memory (default: 256)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Default and upper bound for `/api/availability/dates` when not configured.
pub const DEFAULT_MAX_HORIZON_DAYS: u32 = 60;

pub const DEFAULT_SLOT_CACHE_CAPACITY: usize = 256;

/// Configuration for the Slotbook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use slotbook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Maximum number of days the selectable-dates endpoint will cover
    pub max_horizon_days: u32,

    /// Maximum number of windows held in the slot cache
    pub slot_cache_capacity: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            max_horizon_days: DEFAULT_MAX_HORIZON_DAYS,
            slot_cache_capacity: DEFAULT_SLOT_CACHE_CAPACITY,
        }
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - The SLOTBOOK_MAX_HORIZON_DAYS value cannot be parsed as a u32
    /// - The SLOTBOOK_SLOT_CACHE_CAPACITY value cannot be parsed as a usize
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Calendar settings
        let max_horizon_days = match env::var("SLOTBOOK_MAX_HORIZON_DAYS") {
            Ok(value) => value
                .parse()
                .wrap_err("Invalid SLOTBOOK_MAX_HORIZON_DAYS value")?,
            Err(_) => DEFAULT_MAX_HORIZON_DAYS,
        };
        let slot_cache_capacity = match env::var("SLOTBOOK_SLOT_CACHE_CAPACITY") {
            Ok(value) => value
                .parse()
                .wrap_err("Invalid SLOTBOOK_SLOT_CACHE_CAPACITY value")?,
            Err(_) => DEFAULT_SLOT_CACHE_CAPACITY,
        };

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            max_horizon_days,
            slot_cache_capacity,
        })
    }

    /// Returns the server address as a string, e.g. "127.0.0.1:8080"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level, falling back to INFO.
pub fn parse_log_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
