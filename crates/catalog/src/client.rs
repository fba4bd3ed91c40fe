//! Outbound HTTP adapter for the upstream catalog API.
//!
//! The proxy only ever issues `GET` requests and consumes JSON bodies, so the
//! seam is a single [`CatalogClient::get_json`] method. [`HttpCatalogClient`]
//! implements it with [`reqwest`]. A canned-body stub for tests lives in
//! [`crate::stub`] behind the `test-util` feature.

use async_trait::async_trait;

/// Errors from the upstream HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Issues `GET` requests against the upstream catalog and returns parsed JSON.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch `url` and parse the body as JSON.
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, CatalogClientError>;
}

/// [`CatalogClient`] backed by a pooled [`reqwest::Client`].
///
/// No timeout or retry is configured; a failed call surfaces immediately.
#[derive(Clone, Default)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
}

impl HttpCatalogClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing [`reqwest::Client`] (shares its connection pool).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CatalogClientError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CatalogClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, CatalogClientError> {
        tracing::debug!(%url, "Catalog upstream GET");
        let response = self.client.get(url).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<serde_json::Value>().await?)
    }
}
