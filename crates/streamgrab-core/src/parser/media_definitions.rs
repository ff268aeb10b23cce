//! Embedded `mediaDefinitions` locator and parser
//!
//! Player pages inline their stream list inside a much larger script
//! block, e.g. `var flashvars = {..., "mediaDefinitions":[{...},{...}], ...}`.
//! The surrounding text is not valid JSON, so the array is first cut out
//! with a bracket-depth scan and only that slice is handed to serde_json.

use std::ops::Range;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::RawVariant;

/// Literal key preceding the embedded array
pub const MEDIA_DEFINITIONS_KEY: &str = "\"mediaDefinitions\":";

/// Why no variants could be read from a page
///
/// These never fail a request; the pipeline turns them into an empty list.
#[derive(Error, Debug)]
pub enum DefinitionsError {
    #[error("mediaDefinitions key not found")]
    KeyNotFound,

    #[error("mediaDefinitions array is never closed")]
    Unbalanced,

    #[error("malformed mediaDefinitions JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("mediaDefinitions is not a JSON array")]
    NotAnArray,
}

/// Locates the byte span of the `mediaDefinitions` array in `html`
///
/// Finds the first occurrence of [`MEDIA_DEFINITIONS_KEY`] and scans
/// forward from just after it, counting `[` and `]`. The span starts at the
/// first `[` and ends one past the `]` that brings the depth back to zero,
/// so arrays and objects nested inside the target are skipped over.
///
/// # Returns
/// Byte range such that `&html[range]` is the array literal
///
/// # Errors
/// - `KeyNotFound` if the key does not occur
/// - `Unbalanced` if the text ends before the array closes
pub fn locate_media_definitions(html: &str) -> Result<Range<usize>, DefinitionsError> {
    let key_pos = html
        .find(MEDIA_DEFINITIONS_KEY)
        .ok_or(DefinitionsError::KeyNotFound)?;
    let scan_from = key_pos + MEDIA_DEFINITIONS_KEY.len();

    let mut depth: usize = 0;
    let mut start: Option<usize> = None;

    for (offset, ch) in html[scan_from..].char_indices() {
        match ch {
            '[' => {
                depth += 1;
                start.get_or_insert(scan_from + offset);
            }
            // A `]` before the opening bracket belongs to unrelated text
            ']' if depth > 0 => {
                depth -= 1;
                if depth == 0
                    && let Some(start) = start
                {
                    return Ok(start..scan_from + offset + 1);
                }
            }
            _ => {}
        }
    }

    Err(DefinitionsError::Unbalanced)
}

/// Parses a located array slice into raw variant objects
///
/// Non-object array entries are dropped.
///
/// # Errors
/// - `Malformed` if the slice is not valid JSON
/// - `NotAnArray` if the top-level value is not an array
pub fn parse_media_definitions(span: &str) -> Result<Vec<RawVariant>, DefinitionsError> {
    let Value::Array(entries) = serde_json::from_str::<Value>(span)? else {
        return Err(DefinitionsError::NotAnArray);
    };

    let total = entries.len();
    let variants: Vec<RawVariant> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();

    if variants.len() < total {
        debug!(
            dropped = total - variants.len(),
            "Skipped non-object mediaDefinitions entries"
        );
    }

    Ok(variants)
}

/// Locates and parses the embedded array, degrading to an empty list
///
/// This is the entry point the extraction pipeline uses: a missing key,
/// unbalanced brackets or malformed JSON all mean "no streams on this page".
pub fn extract_raw_variants(html: &str) -> Vec<RawVariant> {
    let result = locate_media_definitions(html)
        .and_then(|span| parse_media_definitions(&html[span]));

    match result {
        Ok(variants) => {
            debug!(count = variants.len(), "Parsed mediaDefinitions");
            variants
        }
        Err(DefinitionsError::KeyNotFound) => {
            debug!("No mediaDefinitions on page");
            Vec::new()
        }
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable mediaDefinitions");
            Vec::new()
        }
    }
}
