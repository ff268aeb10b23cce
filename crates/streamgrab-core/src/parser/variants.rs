//! Variant normalization
//!
//! Maps raw `mediaDefinitions` entries, whose field names differ between
//! player versions, into [`StreamVariant`]s. No network I/O happens here;
//! URLs are resolved later by the resolver.

use serde_json::Value;

use crate::types::{ATTRIBUTION, RawVariant, StreamVariant};

/// Field names carrying the stream URL, in priority order
const URL_FIELDS: &[&str] = &["videoUrl", "url"];

/// Field names carrying the stream format, in priority order
const FORMAT_FIELDS: &[&str] = &["format", "videoFormat"];

const QUALITY_FIELD: &str = "quality";

/// Normalizes raw variants into canonical stream variants
///
/// Entries without any usable URL field are skipped, so the output is
/// never longer than the input. Order is preserved.
pub fn normalize_variants(raw: &[RawVariant]) -> Vec<StreamVariant> {
    raw.iter().filter_map(normalize_variant).collect()
}

/// Normalizes one raw variant, `None` if it has no usable URL
pub fn normalize_variant(raw: &RawVariant) -> Option<StreamVariant> {
    let url = first_string(raw, URL_FIELDS)?;
    let format = first_string(raw, FORMAT_FIELDS)
        .map(str::to_lowercase)
        .unwrap_or_default();
    let quality = raw.get(QUALITY_FIELD).filter(|q| !q.is_null()).cloned();

    Some(StreamVariant {
        quality,
        format,
        url: url.to_string(),
        attribution: ATTRIBUTION.to_string(),
    })
}

/// First non-empty string value among `fields`
fn first_string<'a>(raw: &'a RawVariant, fields: &[&str]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|field| raw.get(*field).and_then(Value::as_str))
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawVariant {
        match value {
            Value::Object(map) => map,
            other => panic!("Expected object, got {other}"),
        }
    }

    #[test]
    fn test_prefers_video_url() {
        let variant = normalize_variant(&raw(json!({
            "videoUrl": "https://cdn.example.com/primary.mp4",
            "url": "https://cdn.example.com/secondary.mp4"
        })))
        .unwrap();
        assert_eq!(variant.url, "https://cdn.example.com/primary.mp4");
    }

    #[test]
    fn test_falls_back_to_url() {
        let variant = normalize_variant(&raw(json!({ "url": "https://cdn.example.com/b.mp4" })))
            .unwrap();
        assert_eq!(variant.url, "https://cdn.example.com/b.mp4");
    }

    #[test]
    fn test_empty_video_url_falls_back_to_url() {
        let variant = normalize_variant(&raw(json!({
            "videoUrl": "",
            "url": "https://cdn.example.com/c.mp4"
        })))
        .unwrap();
        assert_eq!(variant.url, "https://cdn.example.com/c.mp4");
    }

    #[test]
    fn test_skips_variant_without_url() {
        assert!(normalize_variant(&raw(json!({ "quality": "720p", "format": "mp4" }))).is_none());
        assert!(normalize_variant(&raw(json!({ "videoUrl": "", "url": null }))).is_none());
    }

    #[test]
    fn test_format_is_lowercased() {
        let variant = normalize_variant(&raw(json!({ "url": "a", "format": "MP4" }))).unwrap();
        assert_eq!(variant.format, "mp4");
    }

    #[test]
    fn test_format_falls_back_to_video_format() {
        let variant =
            normalize_variant(&raw(json!({ "url": "a", "videoFormat": "HLS" }))).unwrap();
        assert_eq!(variant.format, "hls");
    }

    #[test]
    fn test_missing_format_is_empty() {
        let variant = normalize_variant(&raw(json!({ "url": "a" }))).unwrap();
        assert_eq!(variant.format, "");
    }

    #[test]
    fn test_quality_passes_through_unchanged() {
        let numeric = normalize_variant(&raw(json!({ "url": "a", "quality": 1080 }))).unwrap();
        assert_eq!(numeric.quality, Some(json!(1080)));

        let list = normalize_variant(&raw(json!({ "url": "a", "quality": [] }))).unwrap();
        assert_eq!(list.quality, Some(json!([])));

        let absent = normalize_variant(&raw(json!({ "url": "a" }))).unwrap();
        assert_eq!(absent.quality, None);
    }

    #[test]
    fn test_attribution_is_constant() {
        let variant = normalize_variant(&raw(json!({ "url": "a" }))).unwrap();
        assert_eq!(variant.attribution, "Silent Ghost");
    }

    #[test]
    fn test_normalize_preserves_order_and_drops_urlless() {
        let input = vec![
            raw(json!({ "url": "a" })),
            raw(json!({ "quality": "480p" })),
            raw(json!({ "url": "b" })),
            raw(json!({ "videoUrl": "c" })),
        ];

        let variants = normalize_variants(&input);
        let urls: Vec<&str> = variants.iter().map(|v| v.url.as_str()).collect();
        assert_eq!(urls, vec!["a", "b", "c"]);
        assert!(variants.len() <= input.len());
    }
}
