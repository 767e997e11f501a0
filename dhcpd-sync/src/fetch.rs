use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::SyncError;

/// Export view requested from the IPAM endpoint.
pub const EXPORT_VIEW: &str = "dhcp_v1";

/// Retrieves the raw reservation export over an authenticated request.
///
/// No internal retry: a failed fetch fails the cycle, and the next cycle
/// (or supervisor restart) is the retry mechanism.
pub struct Fetcher {
    client: Client,
    url: String,
    token: String,
}

impl Fetcher {
    /// Build a fetcher with a fixed request timeout.
    pub fn new(url: String, token: String, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url, token })
    }

    /// Fetch the export payload as text.
    ///
    /// Timeouts and connection failures map to
    /// [`SyncError::TransientNetwork`]; a non-success status or a content
    /// type other than plain text maps to [`SyncError::Protocol`].
    pub fn fetch(&self) -> Result<String, SyncError> {
        let response = self
            .client
            .get(&self.url)
            .header("Authorization", format!("Token {}", self.token))
            .query(&[("export", EXPORT_VIEW)])
            .send()
            .map_err(SyncError::TransientNetwork)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Protocol(format!("status {status}")));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.contains("text/plain") {
            return Err(SyncError::Protocol(format!(
                "content type '{content_type}' is not text/plain"
            )));
        }

        let body = response.text().map_err(SyncError::TransientNetwork)?;
        debug!("export fetch succeeded");
        Ok(body)
    }
}
