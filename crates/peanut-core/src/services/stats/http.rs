//! HTTP stats provider
//!
//! Fetches `GET {base_url}/api/stats/{fid}` from a stats service and decodes
//! the JSON body as [`PeanutStats`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::provider::{StatsError, StatsProvider};
use crate::models::PeanutStats;

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct HttpStatsProvider {
    client: Client,
    base_url: String,
}

impl HttpStatsProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Use a preconfigured client (proxy, TLS or timeout settings)
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Endpoint for a single user's stats
    pub fn stats_endpoint(&self, fid: u64) -> String {
        format!("{}/api/stats/{}", self.base_url.trim_end_matches('/'), fid)
    }
}

#[async_trait]
impl StatsProvider for HttpStatsProvider {
    fn provider_id(&self) -> &'static str {
        "http"
    }

    fn display_name(&self) -> &'static str {
        "Stats service"
    }

    async fn fetch_stats(&self, fid: u64) -> Result<PeanutStats, StatsError> {
        if self.base_url.trim().is_empty() {
            return Err(StatsError::Unavailable("no stats service URL configured".to_string()));
        }

        let url = self.stats_endpoint(fid);
        log::debug!("[allowance:provider] GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        log::debug!("[allowance:provider] API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(StatsError::NotFound(fid));
        }
        if !status.is_success() {
            log::warn!("[allowance:provider] Stats API failed: HTTP {}", status);
            return Err(StatsError::ApiError(format!("Stats API returned HTTP {}", status)));
        }

        let body = response.text().await?;
        let stats: PeanutStats = serde_json::from_str(&body)?;

        if stats.fid != fid {
            return Err(StatsError::ParseError(format!(
                "requested fid {} but service returned fid {}",
                fid, stats.fid
            )));
        }

        Ok(stats)
    }

    async fn is_available(&self) -> bool {
        !self.base_url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Mock server answering `GET /api/stats/5` with `response`
    async fn stats_server(response: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/stats/5"))
            .respond_with(response)
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    fn local_provider(server: &MockServer) -> HttpStatsProvider {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpStatsProvider::with_client(server.uri(), client)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = stats_server(ResponseTemplate::new(200).set_body_json(json!({
            "fid": 5,
            "username": "carol",
            "sent": 9,
            "received": 1,
            "lastUpdated": "2025-02-03T10:00:00Z"
        })))
        .await;
        let provider = local_provider(&server);

        let stats = provider.fetch_stats(5).await.unwrap();
        assert_eq!(stats.username.as_deref(), Some("carol"));
        assert_eq!(stats.total_points(), 10);
    }

    #[tokio::test]
    async fn test_fetch_404_is_not_found() {
        let server = stats_server(ResponseTemplate::new(404).set_body_json(json!({}))).await;
        let err = local_provider(&server).fetch_stats(5).await.unwrap_err();
        assert!(matches!(err, StatsError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_fetch_500_is_api_error() {
        let server = stats_server(ResponseTemplate::new(500).set_body_string("oops")).await;
        let err = local_provider(&server).fetch_stats(5).await.unwrap_err();
        assert!(matches!(err, StatsError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_fid_mismatch_is_parse_error() {
        let server = stats_server(ResponseTemplate::new(200).set_body_json(json!({
            "fid": 6,
            "sent": 0,
            "received": 0,
            "lastUpdated": "2025-02-03T10:00:00Z"
        })))
        .await;
        let err = local_provider(&server).fetch_stats(5).await.unwrap_err();
        assert!(matches!(err, StatsError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = stats_server(ResponseTemplate::new(200).set_body_string("not json")).await;
        let err = local_provider(&server).fetch_stats(5).await.unwrap_err();
        assert!(matches!(err, StatsError::ParseError(_)));
    }

    #[test]
    fn test_stats_endpoint() {
        let provider = HttpStatsProvider::new("https://stats.example.com/");
        assert_eq!(
            provider.stats_endpoint(42),
            "https://stats.example.com/api/stats/42"
        );
    }

    #[tokio::test]
    async fn test_empty_base_url_is_unavailable() {
        let provider = HttpStatsProvider::new("");
        assert!(!provider.is_available().await);
        let err = provider.fetch_stats(1).await.unwrap_err();
        assert!(matches!(err, StatsError::Unavailable(_)));
    }
}
