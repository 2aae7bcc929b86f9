use thiserror::Error;

pub const DEFAULT_OPENCAGE_BASE_URL: &str = "https://api.opencagedata.com";
pub const DEFAULT_SUGGESTION_LIMIT: u8 = 5;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
/// In release builds: reads the environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// OpenCage API key, never compiled into the binary
    pub opencage_api_key: String,
    /// Base URL of the geocoding API (overridable for local testing)
    pub opencage_base_url: String,
    /// Maximum number of suggestions requested per lookup
    pub suggestion_limit: u8,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                tracing::info!("Config: Dev mode activated - loaded .env file");
            } else {
                tracing::info!("Config: No .env file found, using process environment");
            }
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let opencage_api_key = lookup("OPENCAGE_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("OPENCAGE_API_KEY"))?;

        let opencage_base_url = lookup("OPENCAGE_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_OPENCAGE_BASE_URL.to_string());

        let suggestion_limit = match lookup("TRIP_SUGGESTION_LIMIT") {
            Some(raw) => match raw.trim().parse::<u8>() {
                Ok(limit) if (1..=100).contains(&limit) => limit,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "TRIP_SUGGESTION_LIMIT",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_SUGGESTION_LIMIT,
        };

        Ok(Self {
            opencage_api_key,
            opencage_base_url,
            suggestion_limit,
        })
    }
}
