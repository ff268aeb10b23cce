//! Page parsers
//!
//! Pure functions over already-fetched HTML: locating and decoding the
//! embedded `mediaDefinitions` array, normalizing its entries, and
//! extracting the page title.

pub mod media_definitions;
pub mod title;
pub mod variants;

pub use media_definitions::{
    DefinitionsError, MEDIA_DEFINITIONS_KEY, extract_raw_variants, locate_media_definitions,
    parse_media_definitions,
};
pub use title::{TITLE_FALLBACK, extract_title};
pub use variants::{normalize_variant, normalize_variants};
