//! HTTP client for page fetches and redirect resolution
//!
//! One [`StreamClient`] is built per process and shared read-only between
//! requests. It performs exactly two kinds of calls: a single GET for the
//! page and a HEAD request per stream variant.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{ExtractorError, Result};
use crate::types::PageHandle;

const USER_AGENT: &str = "Mozilla/5.0";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Page GET timeout in seconds (default: 20)
    pub page_timeout_secs: u64,
    /// Per-variant HEAD request timeout in seconds (default: 10)
    pub resolve_timeout_secs: u64,
    /// Maximum HEAD requests in flight for one extraction (default: 8)
    pub max_concurrent_resolves: usize,
    /// User-Agent header sent with every request (default: "Mozilla/5.0")
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            page_timeout_secs: 20,
            resolve_timeout_secs: 10,
            max_concurrent_resolves: 8,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client wrapper
///
/// Handles all outbound HTTP communication:
/// - Single-attempt page fetches (no retry, no backoff)
/// - Redirect-following HEAD requests that never fail
/// - Fixed identity header and per-call timeouts
pub struct StreamClient {
    client: reqwest::Client,
    page_timeout: Duration,
    resolve_timeout: Duration,
    max_concurrent_resolves: usize,
}

impl StreamClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(ExtractorError::HttpError)?;

        Ok(Self {
            client,
            page_timeout: Duration::from_secs(config.page_timeout_secs),
            resolve_timeout: Duration::from_secs(config.resolve_timeout_secs),
            max_concurrent_resolves: config.max_concurrent_resolves.max(1),
        })
    }

    /// Fetch the HTML of a page
    ///
    /// Sends exactly one GET. Redirects are followed as part of that call.
    ///
    /// # Arguments
    /// * `url` - Absolute page URL
    ///
    /// # Returns
    /// The fetched [`PageHandle`]
    ///
    /// # Errors
    /// - `UpstreamStatus` - Server answered with a non-2xx status
    /// - `HttpError` - Transport failure, timeout, or unreadable body
    pub async fn fetch_page(&self, url: &str) -> Result<PageHandle> {
        debug!(url, "Fetching page");

        let response = self
            .client
            .get(url)
            .timeout(self.page_timeout)
            .send()
            .await
            .map_err(ExtractorError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Page fetch returned non-success status");
            return Err(ExtractorError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await.map_err(ExtractorError::HttpError)?;
        debug!(url, bytes = html.len(), "Fetched page");

        Ok(PageHandle {
            url: url.to_string(),
            html,
        })
    }

    /// Resolve a stream URL through its redirect chain
    ///
    /// Issues a HEAD request with redirect following and returns the URL
    /// of the final response. Any failure (invalid URL, connect error,
    /// timeout, redirect loop) yields `url` unchanged.
    pub async fn resolve_url(&self, url: &str) -> String {
        match self
            .client
            .head(url)
            .timeout(self.resolve_timeout)
            .send()
            .await
        {
            Ok(response) => {
                let resolved = response.url().to_string();
                if resolved != url {
                    debug!(from = url, to = %resolved, "Resolved stream redirect");
                }
                resolved
            }
            Err(e) => {
                warn!(url, error = %e, "Stream URL resolution failed, keeping original");
                url.to_string()
            }
        }
    }

    /// Maximum number of concurrent HEAD requests per extraction
    pub fn max_concurrent_resolves(&self) -> usize {
        self.max_concurrent_resolves
    }
}
