//! HTTP client for the verse lookup service.

use reqwest::Client;
use tracing::debug;

use crate::config::BibleConfig;
use crate::error::BibleError;
use crate::types::{VerseQuery, VerseResponse};

/// Client for bible-api.com style verse lookups.
///
/// One GET per lookup, no retries.
#[derive(Debug, Clone)]
pub struct BibleClient {
    http: Client,
    config: BibleConfig,
}

impl BibleClient {
    /// Create a new client with the given configuration.
    pub fn new(config: BibleConfig) -> Result<Self, BibleError> {
        if config.api_url.trim().is_empty() {
            return Err(BibleError::Config("api_url is empty".to_string()));
        }

        let http = Client::builder()
            .user_agent("HopeBot/1.0")
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &BibleConfig {
        &self.config
    }

    /// Full lookup URL for a query, without the translation parameter.
    pub fn lookup_url(&self, query: &VerseQuery) -> String {
        format!(
            "{}/{}",
            self.config.api_url.trim_end_matches('/'),
            query.path_segment()
        )
    }

    /// Look up a verse.
    ///
    /// Blank queries are rejected without a request. Non-success statuses
    /// are errors; a success reply with no text is returned as-is so the
    /// caller can tell "not found" from "failed".
    pub async fn lookup(&self, query: &VerseQuery) -> Result<VerseResponse, BibleError> {
        if query.is_blank() {
            return Err(BibleError::EmptyQuery);
        }

        let url = self.lookup_url(query);
        debug!("Looking up verse: {}", url);

        let mut request = self.http.get(&url);
        if let Some(ref translation) = self.config.translation {
            request = request.query(&[("translation", translation.as_str())]);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BibleError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::Router;

    /// Serve a fixed reply for every path on an ephemeral local port.
    async fn serve(status: StatusCode, body: &'static str) -> BibleClient {
        let app = Router::new().fallback(move || async move { (status, body) });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        BibleClient::new(BibleConfig::builder().api_url(format!("http://{}", addr)).build())
            .unwrap()
    }

    #[test]
    fn test_lookup_url_forms() {
        let client = BibleClient::new(BibleConfig::builder().api_url("https://bible-api.com/").build())
            .unwrap();

        assert_eq!(
            client.lookup_url(&VerseQuery::reference("John 3:16")),
            "https://bible-api.com/John%203%3A16"
        );
        assert_eq!(
            client.lookup_url(&VerseQuery::passage("John", 3, 16)),
            "https://bible-api.com/John+3:16"
        );
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = BibleClient::new(BibleConfig::builder().api_url(" ").build());
        assert!(matches!(result, Err(BibleError::Config(_))));
    }

    #[tokio::test]
    async fn test_blank_query_makes_no_request() {
        // Unroutable URL: a request would fail with an HTTP error, not EmptyQuery.
        let client =
            BibleClient::new(BibleConfig::builder().api_url("http://127.0.0.1:9").build()).unwrap();

        let result = client.lookup(&VerseQuery::reference("   ")).await;
        assert!(matches!(result, Err(BibleError::EmptyQuery)));
    }

    #[tokio::test]
    async fn test_success_reply_is_decoded() {
        let client = serve(
            StatusCode::OK,
            r#"{"reference":"John 3:16","translation_name":"World English Bible","text":"For God so loved the world\n"}"#,
        )
        .await;

        let query = VerseQuery::reference("John 3:16");
        let verse = client.lookup(&query).await.unwrap().into_result(&query).unwrap();
        assert_eq!(verse.translation, "World English Bible");
        assert_eq!(verse.text, "For God so loved the world");
    }

    #[tokio::test]
    async fn test_not_found_status_is_error() {
        let client = serve(StatusCode::NOT_FOUND, r#"{"error":"not found"}"#).await;

        let result = client.lookup(&VerseQuery::reference("Nothing 99:99")).await;
        assert!(matches!(result, Err(BibleError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_server_error_status_is_error() {
        let client = serve(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;

        let result = client.lookup(&VerseQuery::passage("John", 3, 16)).await;
        match result {
            Err(BibleError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_json_error() {
        let client = serve(StatusCode::OK, "<html>maintenance</html>").await;

        let result = client.lookup(&VerseQuery::reference("John 3:16")).await;
        assert!(matches!(result, Err(BibleError::Json(_))));
    }

    #[tokio::test]
    #[ignore] // Requires network
    async fn test_lookup_live() {
        let client = BibleClient::new(BibleConfig::default()).unwrap();
        let query = VerseQuery::reference("John 3:16");
        let reply = client.lookup(&query).await.unwrap();

        let verse = reply.into_result(&query).unwrap();
        assert_eq!(verse.reference, "John 3:16");
        assert!(verse.text.contains("God"));
    }

    #[tokio::test]
    #[ignore] // Requires network
    async fn test_lookup_live_not_found() {
        let client = BibleClient::new(BibleConfig::default()).unwrap();
        let result = client.lookup(&VerseQuery::reference("Nothing 99:99")).await;
        assert!(matches!(result, Err(BibleError::Status { status: 404, .. })));
    }
}
