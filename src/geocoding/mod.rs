//! Destination lookup against a geocoding service.

pub mod client;
pub mod models;

pub use client::OpenCageClient;

use reqwest::Error as ReqwestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeocodingError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Geocoding API returned status {0}")]
    Status(u16),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// One candidate place for the destination field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Geohash of the match, stable across lookups
    pub id: String,
    /// Formatted address shown to the user and written as the destination
    pub label: String,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Anything that can turn free text into place suggestions
#[async_trait::async_trait]
pub trait GeocodingService: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Suggestion>, GeocodingError>;
}
