use reqwest::Client;
use tracing::{debug, warn};

use super::models::GeocodeResponse;
use super::{GeocodingError, GeocodingService, Suggestion};
use crate::config::{Config, DEFAULT_OPENCAGE_BASE_URL, DEFAULT_SUGGESTION_LIMIT};

#[derive(Clone)]
pub struct OpenCageClient {
    client: Client,
    api_key: String,
    base_url: String,
    limit: u8,
}

impl OpenCageClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_OPENCAGE_BASE_URL.to_string(),
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.opencage_api_key.clone())
            .with_base_url(&config.opencage_base_url)
            .with_limit(config.suggestion_limit)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_limit(mut self, limit: u8) -> Self {
        self.limit = limit;
        self
    }

    /// Forward geocode a free-text query into at most `limit` suggestions
    pub async fn geocode(&self, query: &str) -> Result<Vec<Suggestion>, GeocodingError> {
        if query.trim().is_empty() {
            return Err(GeocodingError::InvalidInput(
                "query cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/geocode/v1/json", self.base_url);
        let limit = self.limit.to_string();

        debug!("OpenCage API: GET {} with q='{}', limit={}", url, query, limit);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("key", self.api_key.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let geocode_response: GeocodeResponse = response.json().await?;
            let suggestions = geocode_response.into_suggestions();
            debug!("OpenCage returned {} result(s) for '{}'", suggestions.len(), query);
            Ok(suggestions)
        } else if status == 401 || status == 403 {
            warn!("OpenCage rejected the API key ({})", status);
            Err(GeocodingError::InvalidApiKey)
        } else if status == 402 || status == 429 {
            warn!("OpenCage rate limit exceeded ({})", status);
            Err(GeocodingError::RateLimit)
        } else {
            warn!("OpenCage API error: {}", status);
            Err(GeocodingError::Status(status.as_u16()))
        }
    }
}

#[async_trait::async_trait]
impl GeocodingService for OpenCageClient {
    async fn search(&self, query: &str) -> Result<Vec<Suggestion>, GeocodingError> {
        self.geocode(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_opencage_client_creation() {
        let client = OpenCageClient::new("test_key".to_string());
        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.base_url, "https://api.opencagedata.com");
        assert_eq!(client.limit, 5);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            opencage_api_key: "k".to_string(),
            opencage_base_url: "http://localhost:9000/".to_string(),
            suggestion_limit: 3,
        };
        let client = OpenCageClient::from_config(&config);
        assert_eq!(client.base_url, "http://localhost:9000");
        assert_eq!(client.limit, 3);
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected_without_request() {
        let client = OpenCageClient::new("k".to_string()).with_base_url("http://127.0.0.1:9");
        let result = client.geocode("   ").await;
        assert!(matches!(result, Err(GeocodingError::InvalidInput(_))));
    }
}
