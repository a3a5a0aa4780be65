use std::env;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("THELIN_API_URL is not set")]
    MissingApiUrl,
    #[error("THELIN_API_URL must start with http:// or https://: {0}")]
    InvalidApiUrl(String),
    #[error("Invalid value for {key}: {source}")]
    InvalidNumber {
        key: &'static str,
        source: ParseIntError,
    },
}

/// Runtime configuration, read from the environment (with .env support).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the orchestrator backend.
    pub api_url: String,
    /// Reviewer identity; absence means signed out.
    pub user: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Auto-refresh interval for the current screen; 0 disables polling.
    pub refresh_secs: u64,
    /// List page size, clamped to 1..=100.
    pub page_size: u32,
}

fn parse_var<T: std::str::FromStr<Err = ParseIntError>>(
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|source| ConfigError::InvalidNumber { key, source }),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("THELIN_API_URL").map_err(|_| ConfigError::MissingApiUrl)?;
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidApiUrl(api_url));
        }

        let user = env::var("THELIN_USER").ok().filter(|user| !user.is_empty());
        let timeout_secs = parse_var("THELIN_TIMEOUT_SECS", 30u64)?;
        let refresh_secs = parse_var("THELIN_REFRESH_SECS", 0u64)?;
        let page_size = parse_var("THELIN_PAGE_SIZE", 20u32)?.clamp(1, 100);

        Ok(Config {
            api_url,
            user,
            timeout_secs,
            refresh_secs,
            page_size,
        })
    }
}
