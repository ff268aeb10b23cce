//! Error types for the stream extractor
//!
//! Only failures of the initial page fetch (and invalid input) surface as
//! [`ExtractorError`]. Everything after the fetch degrades to empty or
//! fallback values instead.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all extraction operations that can fail a request
///
/// Implements Display for human-readable messages and Serialize
/// so API layers can embed it directly in a JSON error body.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// HTTP request failed at the transport level (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Upstream page answered with a non-success status
    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    /// Page URL is not an absolute http(s) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ExtractorError {
    /// Upstream HTTP status, when the failure carries one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ExtractorError::UpstreamStatus { status, .. } => Some(*status),
            ExtractorError::HttpError(e) => e.status().map(|s| s.as_u16()),
            ExtractorError::InvalidUrl(_) => None,
        }
    }

    /// Whether the failure was the page fetch running out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, ExtractorError::HttpError(e) if e.is_timeout())
    }
}

impl Serialize for ExtractorError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_upstream_status() {
        let error = ExtractorError::UpstreamStatus {
            status: 404,
            url: "https://example.com/watch".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Upstream returned HTTP 404 for https://example.com/watch"
        );
    }

    #[test]
    fn test_error_display_invalid_url() {
        let error = ExtractorError::InvalidUrl("not-a-url".to_string());
        assert_eq!(error.to_string(), "Invalid URL: not-a-url");
    }

    #[test]
    fn test_upstream_status() {
        let error = ExtractorError::UpstreamStatus {
            status: 503,
            url: "https://example.com".to_string(),
        };
        assert_eq!(error.upstream_status(), Some(503));
        assert!(!error.is_timeout());

        let error = ExtractorError::InvalidUrl("ftp://x".to_string());
        assert_eq!(error.upstream_status(), None);
    }

    #[test]
    fn test_error_serialize() {
        let error = ExtractorError::InvalidUrl("".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Invalid URL: \"");
    }
}
