use serde::Deserialize;

use super::Suggestion;

/// OpenCage forward geocoding response
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub annotations: Annotations,
    pub formatted: String,
}

#[derive(Debug, Deserialize)]
pub struct Annotations {
    pub geohash: String,
}

impl From<GeocodeResult> for Suggestion {
    fn from(result: GeocodeResult) -> Self {
        Suggestion {
            id: result.annotations.geohash,
            label: result.formatted,
        }
    }
}

impl GeocodeResponse {
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.results.into_iter().map(Suggestion::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_map_to_suggestions_in_order() {
        let payload = r#"{
            "results": [
                {
                    "annotations": { "geohash": "6gyf4bf8m0uv", "timezone": { "name": "America/Sao_Paulo" } },
                    "formatted": "São Paulo, Brasil",
                    "confidence": 1
                },
                {
                    "annotations": { "geohash": "75cm9txe2yg0" },
                    "formatted": "Rio de Janeiro, Brasil"
                }
            ],
            "status": { "code": 200, "message": "OK" }
        }"#;

        let response: GeocodeResponse = serde_json::from_str(payload).unwrap();
        let suggestions = response.into_suggestions();

        assert_eq!(
            suggestions,
            vec![
                Suggestion::new("6gyf4bf8m0uv", "São Paulo, Brasil"),
                Suggestion::new("75cm9txe2yg0", "Rio de Janeiro, Brasil"),
            ]
        );
    }

    #[test]
    fn test_empty_results() {
        let response: GeocodeResponse = serde_json::from_str(r#"{ "results": [] }"#).unwrap();
        assert!(response.into_suggestions().is_empty());
    }

    #[test]
    fn test_missing_geohash_is_malformed() {
        let payload = r#"{ "results": [ { "annotations": {}, "formatted": "Lisboa, Portugal" } ] }"#;
        assert!(serde_json::from_str::<GeocodeResponse>(payload).is_err());
    }
}
