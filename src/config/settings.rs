//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use super::cities::CityTable;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Placeholder value shipped in sample `.env` files
pub const GEMINI_KEY_PLACEHOLDER: &str = "YOUR_GEMINI_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Amadeus flight pricing API configuration
    pub amadeus: AmadeusConfig,
    /// Gemini text generation configuration
    pub gemini: GeminiConfig,
    /// Dashboard behaviour
    pub dashboard: DashboardConfig,
    /// Security configuration
    pub security: SecurityConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Amadeus API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmadeusConfig {
    /// OAuth2 client id
    pub client_id: String,
    /// OAuth2 client secret
    #[serde(skip_serializing)]
    pub client_secret: String,
    /// API base URL
    pub base_url: String,
    /// Currency requested for offer prices
    pub currency: String,
    /// Maximum offers per search
    pub max_offers: u32,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Gemini API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key, absent when insights are disabled
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Cities offered in the selector
    pub cities: CityTable,
    /// Number of future days covered by the trend chart
    pub trend_days: u32,
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Whether CORS is enabled
    pub cors_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
    /// Requests slower than this many seconds are flagged
    pub slow_request_secs: u64,
}

impl AmadeusConfig {
    /// Whether both client credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl GeminiConfig {
    /// Usable API key, ignoring empty and placeholder values
    pub fn usable_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != GEMINI_KEY_PLACEHOLDER)
    }

    pub fn is_configured(&self) -> bool {
        self.usable_key().is_some()
    }
}

impl Settings {
    /// Create a new configuration instance
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let cities = match std::env::var("CITIES_FILE") {
            Ok(path) if !path.is_empty() => CityTable::load(Path::new(&path))
                .context("Failed to load CITIES_FILE")?,
            _ => CityTable::default(),
        };

        let timeout: u64 = get_env_or_default("REQUEST_TIMEOUT", "30")
            .parse()
            .context("Invalid timeout value")?;

        let settings = Self {
            server: ServerConfig {
                host: get_env_or_default("SERVER_HOST", "0.0.0.0"),
                port: get_env_or_default("SERVER_PORT", "5000")
                    .parse()
                    .context("Invalid port number")?,
            },
            amadeus: AmadeusConfig {
                client_id: get_env_or_default("AMADEUS_API_KEY", ""),
                client_secret: get_env_or_default("AMADEUS_API_SECRET", ""),
                base_url: get_env_or_default("AMADEUS_BASE_URL", "https://test.api.amadeus.com"),
                currency: get_env_or_default("CURRENCY_CODE", "AUD"),
                max_offers: get_env_or_default("MAX_OFFERS", "50")
                    .parse()
                    .context("Invalid maximum offer count")?,
                timeout,
            },
            gemini: GeminiConfig {
                api_key: std::env::var("GEMINI_API_KEY").ok(),
                base_url: get_env_or_default(
                    "GEMINI_BASE_URL",
                    "https://generativelanguage.googleapis.com/v1beta",
                ),
                model: get_env_or_default("GEMINI_MODEL", "gemini-1.5-flash-latest"),
                timeout,
            },
            dashboard: DashboardConfig {
                cities,
                trend_days: get_env_or_default("TREND_DAYS", "30")
                    .parse()
                    .context("Invalid trend window")?,
            },
            security: SecurityConfig {
                cors_enabled: get_env_or_default("CORS_ENABLED", "true")
                    .parse()
                    .context("Invalid CORS enabled flag")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
                slow_request_secs: get_env_or_default("SLOW_REQUEST_SECS", "20")
                    .parse()
                    .context("Invalid slow request threshold")?,
            },
        };

        // Validate configuration
        settings.validate()?;

        if !settings.amadeus.has_credentials() {
            warn!("AMADEUS_API_KEY / AMADEUS_API_SECRET not set, flight data routes will fail");
        }
        if !settings.gemini.is_configured() {
            warn!("Gemini API key is not set, AI insights will be disabled");
        }

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        // Validate port range
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        // Validate URL format
        if !self.amadeus.base_url.starts_with("http") {
            anyhow::bail!("Invalid Amadeus base URL format, should start with 'http'");
        }
        if !self.gemini.base_url.starts_with("http") {
            anyhow::bail!("Invalid Gemini base URL format, should start with 'http'");
        }

        // Validate timeout values
        if self.amadeus.timeout == 0 || self.gemini.timeout == 0 {
            anyhow::bail!("Timeout values cannot be 0");
        }

        if self.amadeus.max_offers == 0 {
            anyhow::bail!("Maximum offer count cannot be 0");
        }

        if self.amadeus.currency.len() != 3 {
            anyhow::bail!("Invalid currency code: {}", self.amadeus.currency);
        }

        if self.dashboard.trend_days == 0 {
            anyhow::bail!("Trend window cannot be 0 days");
        }

        self.dashboard.cities.validate()?;

        // Validate log filter; accepts bare levels as well as per-target directives
        EnvFilter::try_new(&self.logging.level)
            .with_context(|| format!("Invalid log level: {}", self.logging.level))?;

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
