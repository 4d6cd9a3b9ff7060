//! Typed HTTP client for the Exa search API.

use async_trait::async_trait;
use reqwest::header;
use serde::Serialize;
use std::time::Duration;

use super::SearchProvider;
use crate::config::defaults;
use crate::error::{Result, SearchError};
use crate::models::{SearchQuery, SearchResponse};

/// Production Exa endpoint root
pub const EXA_API_URL: &str = "https://api.exa.ai";

pub struct ExaClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
    timeout: Duration,
}

// ── Exa API request types ───────────────────────────

#[derive(Debug, Serialize)]
struct ContentsSpec {
    text: bool,
}

#[derive(Debug, Serialize)]
struct SearchRequestBody<'a> {
    query: &'a str,
    #[serde(rename = "type")]
    search_type: &'static str,
    #[serde(rename = "numResults")]
    num_results: u32,
    contents: ContentsSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_published_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_published_date: Option<&'a str>,
}

impl<'a> SearchRequestBody<'a> {
    fn from_query(query: &'a SearchQuery) -> Self {
        Self {
            query: &query.text,
            search_type: "keyword",
            num_results: query.num_results,
            contents: ContentsSpec { text: true },
            start_published_date: query.start_date.as_deref(),
            end_published_date: query.end_date.as_deref(),
        }
    }
}

// ── Client impl ─────────────────────────────────────

impl ExaClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            base_url: EXA_API_URL.to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
        }
    }

    /// Override the endpoint root (builder pattern, used by tests)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout (builder pattern)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl SearchProvider for ExaClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let body = SearchRequestBody::from_query(query);

        let resp = self
            .client
            .post(format!("{}/search", self.base_url))
            .header(header::ACCEPT, "application/json")
            .header("x-api-key", &self.api_key)
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(SearchError::Network(format!("HTTP {}: {}", status, text)));
        }

        let decoded: SearchResponse = serde_json::from_str(&text)?;
        log::info!(
            "[EXA] Query '{}' resolved as '{}' with {} results",
            query.text,
            decoded.resolved_search_type,
            decoded.results.len()
        );
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn test_request_body_includes_dates_when_present() {
        let query = SearchQuery::new(
            "rust async",
            Some("2024-01-01T00:00:00.000Z".to_string()),
            Some("2024-06-01T00:00:00.000Z".to_string()),
            5,
        );
        let body = serde_json::to_value(SearchRequestBody::from_query(&query)).unwrap();
        assert_eq!(
            body,
            json!({
                "query": "rust async",
                "type": "keyword",
                "numResults": 5,
                "contents": {"text": true},
                "start_published_date": "2024-01-01T00:00:00.000Z",
                "end_published_date": "2024-06-01T00:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_request_body_omits_absent_dates() {
        let query = SearchQuery::new("rust async", None, None, 10);
        let body = serde_json::to_value(SearchRequestBody::from_query(&query)).unwrap();
        assert_eq!(
            body,
            json!({
                "query": "rust async",
                "type": "keyword",
                "numResults": 10,
                "contents": {"text": true},
            })
        );
    }

    #[tokio::test]
    async fn test_search_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/search")
            .match_header("x-api-key", "test-key")
            .match_header("accept", "application/json")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "query": "rust async",
                "type": "keyword",
                "numResults": 2,
                "contents": {"text": true},
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "requestId": "req-1",
                    "resolvedSearchType": "keyword",
                    "results": [
                        {"id": "a", "title": "Intro", "url": "https://example.com/a"},
                        {"id": "b", "title": "Deep Dive", "url": "https://example.com/b"}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = ExaClient::new("test-key").with_base_url(&server.url());
        let query = SearchQuery::new("rust async", None, None, 2);
        let resp = client.search(&query).await.unwrap();

        assert_eq!(resp.request_id, "req-1");
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].title, "Intro");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_non_2xx_is_network_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(401)
            .with_body("invalid api key")
            .create_async()
            .await;

        let client = ExaClient::new("bad-key").with_base_url(&server.url());
        let query = SearchQuery::new("rust", None, None, 10);
        let err = client.search(&query).await.unwrap_err();

        assert!(matches!(err, SearchError::Network(_)));
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_search_malformed_body_is_parse_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body("this is not json")
            .create_async()
            .await;

        let client = ExaClient::new("test-key").with_base_url(&server.url());
        let query = SearchQuery::new("rust", None, None, 10);
        let err = client.search(&query).await.unwrap_err();

        assert!(matches!(err, SearchError::Parse(_)));
    }
}
