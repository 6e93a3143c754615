/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 3001)
/// - `DATA_DIR`: Directory for per-user task files (default: data)
/// - `CORS_ORIGINS`: Comma-separated allowed origins (default: *)
/// - `UTC_OFFSET_MINUTES`: Timezone offset for the archive day boundary
///   (default: the host's current local offset)
/// - `RUST_LOG`: Log filter (default: eisentask_api=debug,tower_http=debug)
///
/// # Example
///
/// ```no_run
/// use eisentask_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```
use std::env;
use std::path::PathBuf;

use chrono::{FixedOffset, Local, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Task storage configuration
    pub storage: StorageConfig,

    /// Time handling configuration
    pub time: TimeConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins; "*" means permissive
    pub cors_origins: Vec<String>,
}

/// Task storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per user
    pub data_dir: PathBuf,
}

/// Time handling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Offset from UTC, in minutes, used for the archive day boundary
    pub utc_offset_minutes: i32,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable has an unparseable or
    /// out-of-range value.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use eisentask_api::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_env()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()?;

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));

        let utc_offset_minutes = match env::var("UTC_OFFSET_MINUTES") {
            Ok(value) => value.parse::<i32>()?,
            Err(_) => Local::now().offset().local_minus_utc() / 60,
        };
        if utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .is_none()
        {
            anyhow::bail!("UTC_OFFSET_MINUTES must be within one day of UTC");
        }

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
                cors_origins,
            },
            storage: StorageConfig { data_dir },
            time: TimeConfig { utc_offset_minutes },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    /// Returns the configured archive timezone
    pub fn utc_offset(&self) -> FixedOffset {
        self.time
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}
