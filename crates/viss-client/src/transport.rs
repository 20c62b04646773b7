//! HTTP transport for the VISS API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::warn;

use crate::error::VissResult;

/// Abstraction over the HTTP conversation with the VISS server.
///
/// The uploader only needs JSON POST and plain GET. Both methods return
/// the raw response body regardless of status; non-success statuses are
/// logged, and callers detect failure by parsing the body. Only
/// connection-level failures are errors.
#[async_trait]
pub trait VissTransport: Send + Sync {
    /// POST a JSON body and return the response body text.
    async fn post_json(&self, url: &str, body: &str) -> VissResult<String>;

    /// GET a URL and return the response body text.
    async fn get(&self, url: &str) -> VissResult<String>;
}

/// Transport backed by a reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default request timeout.
    pub fn new() -> VissResult<Self> {
        Self::with_timeout(Duration::from_secs(60))
    }

    /// Create a transport with an explicit request timeout.
    pub fn with_timeout(timeout: Duration) -> VissResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl VissTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: &str) -> VissResult<String> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await?;

        let status = response.status();
        if !(status == StatusCode::OK || status == StatusCode::CREATED) {
            warn!(url = %url, status = %status, "POST returned non-success status");
        }

        Ok(response.text().await?)
    }

    async fn get(&self, url: &str) -> VissResult<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %url, status = %status, "GET returned non-success status");
        }

        Ok(response.text().await?)
    }
}
