use std::time::Duration;

use reqwest::Client;
use shared::{decode, HelloResponse, SchemaError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    Schema(#[from] SchemaError),
}

/// Thin client for the hello API. One request per call, no retries.
#[derive(Clone)]
pub struct HelloClient {
    client: Client,
    base_url: String,
}

impl HelloClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// GET {base_url}/hello, checked against the shared schema.
    pub async fn fetch_hello(&self) -> Result<HelloResponse, ClientError> {
        let url = format!("{}/hello", self.base_url);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(decode(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{serve, unreachable_base_url};
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    fn client(base_url: &str) -> HelloClient {
        HelloClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_hello_returns_message() {
        let base = serve(Router::new().route(
            "/hello",
            get(|| async { Json(json!({ "message": "hello world" })) }),
        ))
        .await;

        let hello = client(&base).fetch_hello().await.unwrap();
        assert_eq!(hello.message, "hello world");
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_is_ignored() {
        let base = serve(Router::new().route(
            "/hello",
            get(|| async { Json(json!({ "message": "hi" })) }),
        ))
        .await;

        let hello = client(&format!("{base}/")).fetch_hello().await.unwrap();
        assert_eq!(hello.message, "hi");
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let base = serve(Router::new().route(
            "/hello",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let err = client(&base).fetch_hello().await.unwrap_err();
        match err {
            ClientError::Api { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_wrong_shape_is_schema_error() {
        let base = serve(Router::new().route(
            "/hello",
            get(|| async { Json(json!({ "greeting": "hello world" })) }),
        ))
        .await;

        let err = client(&base).fetch_hello().await.unwrap_err();
        assert!(matches!(err, ClientError::Schema(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        let base = unreachable_base_url().await;

        let err = client(&base).fetch_hello().await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}
