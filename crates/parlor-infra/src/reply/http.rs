//! HTTP reply endpoint client.
//!
//! POSTs `{ "input": prompt }` as JSON and reads the reply from the `ai`
//! field of the response body.

use std::time::Duration;

use parlor_core::reply::ReplyFetcher;
use parlor_types::error::ReplyError;
use parlor_types::reply::{ReplyRequest, ReplyResponse};

/// Reply fetcher talking to a JSON endpoint over HTTP.
pub struct HttpReplyFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpReplyFetcher {
    /// Create a fetcher for `url`.
    ///
    /// `timeout` of `None` leaves reqwest's default (no overall timeout).
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("failed to create reqwest client");

        Self {
            client,
            url: url.into(),
        }
    }
}

impl ReplyFetcher for HttpReplyFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, prompt: &str) -> Result<String, ReplyError> {
        let body = ReplyRequest {
            input: prompt.to_string(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ReplyError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %error_body, "Reply endpoint error body");
            return Err(ReplyError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let reply: ReplyResponse = response.json().await.map_err(|e| {
            ReplyError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        Ok(reply.text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn fetcher_for(server: &MockServer) -> HttpReplyFetcher {
        HttpReplyFetcher::new(format!("{}/submit", server.uri()), None)
    }

    #[tokio::test]
    async fn test_fetch_posts_input_and_reads_ai() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "input": "Hello" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ai": "Hi there!" })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = fetcher_for(&server).await.fetch("Hello").await.unwrap();
        assert_eq!(reply, "Hi there!");
    }

    #[tokio::test]
    async fn test_fetch_maps_status_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = fetcher_for(&server).await.fetch("Hello").await.unwrap_err();
        match err {
            ReplyError::Status { code, reason } => {
                assert_eq!(code, 500);
                assert_eq!(reason, "Internal Server Error");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_trims_blank_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ai": "   " })))
            .mount(&server)
            .await;

        let reply = fetcher_for(&server).await.fetch("Hello").await.unwrap();
        assert!(reply.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_missing_ai_field_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "other": 1 })))
            .mount(&server)
            .await;

        let reply = fetcher_for(&server).await.fetch("Hello").await.unwrap();
        assert_eq!(reply, "");
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_deserialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = fetcher_for(&server).await.fetch("Hello").await.unwrap_err();
        assert!(matches!(err, ReplyError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_is_transport_error() {
        // Bind and release an ephemeral port so nothing is listening on it
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let fetcher =
            HttpReplyFetcher::new(format!("http://{addr}/submit"), Some(Duration::from_secs(2)));

        let err = fetcher.fetch("Hello").await.unwrap_err();
        assert!(matches!(err, ReplyError::Transport(_)));
    }
}
