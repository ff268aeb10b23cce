//! Streamgrab Core Library
//!
//! Extracts direct, playable stream URLs and the title from video pages
//! whose player embeds a `"mediaDefinitions":[...]` JSON blob in a script tag.
//!
//! # Overview
//!
//! One extraction run:
//! - fetches the page once ([`StreamClient::fetch_page`])
//! - cuts the embedded array out of the HTML with a bracket-depth scan
//! - normalizes each entry into a [`StreamVariant`]
//! - resolves each variant URL through its redirects, concurrently
//! - extracts a best-effort page title
//!
//! Only a failed page fetch fails the run. Anything past the fetch degrades
//! to empty or fallback values.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use streamgrab_core::{ExtractorOptions, Result, StreamClient, StreamExtractor};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Arc::new(StreamClient::new()?);
//!     let extractor = StreamExtractor::new(
//!         client,
//!         "https://example.com/view_video?id=42",
//!         ExtractorOptions::default(),
//!     )?;
//!
//!     let result = extractor.extract().await?;
//!     println!("{}", result.title.as_deref().unwrap_or("N/A"));
//!     for variant in &result.variants {
//!         println!("{}: {}", variant.format, variant.url);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod extractor;
pub mod parser;
mod resolver;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, StreamClient};

// Re-export error types
pub use error::{ExtractorError, Result};

// Re-export the pipeline
pub use extractor::{ExtractorOptions, StreamExtractor};
pub use resolver::resolve_variants;

// Re-export parser functions
pub use parser::{extract_raw_variants, extract_title, normalize_variants};

// Re-export data types
pub use types::{ATTRIBUTION, ExtractionResult, PageHandle, RawVariant, StreamVariant};
