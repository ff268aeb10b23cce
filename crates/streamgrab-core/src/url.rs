//! URL helper functions
//!
//! Validates page URLs before any network I/O happens.

use reqwest::Url;

use crate::error::{ExtractorError, Result};

/// Parses and validates a page URL
///
/// Accepts only absolute `http` or `https` URLs with a host.
///
/// # Arguments
/// * `raw` - URL string as received from the caller
///
/// # Returns
/// The parsed [`Url`]
///
/// # Errors
/// Returns `InvalidUrl` for empty input, unparsable input, or a non-http(s) scheme
///
/// # Example
/// ```
/// use streamgrab_core::url::parse_page_url;
/// let url = parse_page_url("https://example.com/watch/123").unwrap();
/// assert_eq!(url.host_str(), Some("example.com"));
/// assert!(parse_page_url("ftp://example.com/file").is_err());
/// ```
pub fn parse_page_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ExtractorError::InvalidUrl("URL cannot be empty".to_string()));
    }

    let url = Url::parse(trimmed)
        .map_err(|e| ExtractorError::InvalidUrl(format!("{trimmed}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ExtractorError::InvalidUrl(format!(
            "{trimmed}: unsupported scheme '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ExtractorError::InvalidUrl(format!("{trimmed}: missing host")));
    }

    Ok(url)
}
