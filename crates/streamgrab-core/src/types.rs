//! Core data types for the stream extractor
//!
//! Contains the data structures flowing through one extraction run.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribution attached to every emitted stream variant
pub const ATTRIBUTION: &str = "Silent Ghost";

/// A fetched page document
///
/// Created once per extraction run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHandle {
    /// URL the page was requested from
    pub url: String,

    /// Raw HTML body
    pub html: String,
}

/// One undecoded entry of the embedded `mediaDefinitions` array
pub type RawVariant = Map<String, Value>;

/// A playable stream variant in canonical shape
///
/// `url` is never empty. Serialized with the `Developer` key expected
/// by API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamVariant {
    /// Quality label passed through as found (e.g. "720p" or 720)
    pub quality: Option<Value>,

    /// Lower-cased container/stream format, empty when unknown
    pub format: String,

    /// Resolved stream URL, or the original URL when resolution failed
    pub url: String,

    /// Always [`ATTRIBUTION`]
    #[serde(rename = "Developer")]
    pub attribution: String,
}

/// Result of one extraction run
///
/// `variants` keeps the order of the embedded array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Page title, absent when title extraction is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Page URL exactly as requested
    #[serde(rename = "video_url")]
    pub source_url: String,

    /// Normalized and resolved stream variants
    #[serde(rename = "streaming_urls")]
    pub variants: Vec<StreamVariant>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stream_variant_wire_shape() {
        let variant = StreamVariant {
            quality: Some(json!("720p")),
            format: "mp4".to_string(),
            url: "https://cdn.example.com/720.mp4".to_string(),
            attribution: ATTRIBUTION.to_string(),
        };

        let value = serde_json::to_value(&variant).expect("Serialization should succeed");
        assert_eq!(
            value,
            json!({
                "quality": "720p",
                "format": "mp4",
                "url": "https://cdn.example.com/720.mp4",
                "Developer": "Silent Ghost"
            })
        );
    }

    #[test]
    fn test_missing_quality_serializes_as_null() {
        let variant = StreamVariant {
            quality: None,
            format: String::new(),
            url: "https://cdn.example.com/a.m3u8".to_string(),
            attribution: ATTRIBUTION.to_string(),
        };

        let value = serde_json::to_value(&variant).expect("Serialization should succeed");
        assert_eq!(value["quality"], Value::Null);
        assert_eq!(value["format"], "");
    }

    #[test]
    fn test_extraction_result_without_title() {
        let result = ExtractionResult {
            title: None,
            source_url: "https://example.com/watch/1".to_string(),
            variants: Vec::new(),
        };

        let value = serde_json::to_value(&result).expect("Serialization should succeed");
        assert_eq!(
            value,
            json!({
                "video_url": "https://example.com/watch/1",
                "streaming_urls": []
            })
        );
    }

    #[test]
    fn test_extraction_result_with_title() {
        let result = ExtractionResult {
            title: Some("X".to_string()),
            source_url: "https://example.com/watch/1".to_string(),
            variants: Vec::new(),
        };

        let json = serde_json::to_string(&result).expect("Serialization should succeed");
        let back: ExtractionResult =
            serde_json::from_str(&json).expect("Deserialization should succeed");
        assert_eq!(result, back);
        assert!(json.contains("\"title\":\"X\""));
    }
}
