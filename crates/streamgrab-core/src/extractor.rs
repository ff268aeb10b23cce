//! Extraction pipeline
//!
//! Composes fetch, title extraction, and the locate → parse → normalize →
//! resolve chain into one pass over a single page.

use std::borrow::Cow;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use crate::client::StreamClient;
use crate::error::Result;
use crate::parser::{extract_raw_variants, extract_title, normalize_variants};
use crate::resolver::resolve_variants;
use crate::types::{ExtractionResult, PageHandle, StreamVariant};
use crate::url::parse_page_url;

/// Behavior switches for a [`StreamExtractor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Include the page title in [`ExtractionResult`] (default: true)
    pub include_title: bool,
    /// Fetch the page at most once per extractor instance (default: true)
    ///
    /// When off, each of [`StreamExtractor::extract_title`] and
    /// [`StreamExtractor::extract_streams`] fetches on its own.
    /// [`StreamExtractor::extract`] always fetches exactly once.
    pub memoize_fetch: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            include_title: true,
            memoize_fetch: true,
        }
    }
}

/// Extractor for one page URL
///
/// Lives for a single request. The HTTP client is shared; everything else
/// is owned by this instance.
pub struct StreamExtractor {
    client: Arc<StreamClient>,
    /// Exactly as given, echoed back in the result
    page_url: String,
    /// Validated form actually requested
    fetch_url: String,
    options: ExtractorOptions,
    page: OnceCell<PageHandle>,
}

impl StreamExtractor {
    /// Create an extractor for `page_url`
    ///
    /// # Errors
    /// Returns `InvalidUrl` if `page_url` is not an absolute http(s) URL
    pub fn new(
        client: Arc<StreamClient>,
        page_url: &str,
        options: ExtractorOptions,
    ) -> Result<Self> {
        parse_page_url(page_url)?;

        Ok(Self {
            client,
            page_url: page_url.to_string(),
            fetch_url: page_url.trim().to_string(),
            options,
            page: OnceCell::new(),
        })
    }

    /// The page URL exactly as passed to [`StreamExtractor::new`]
    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// The fetched page, from the memo when `memoize_fetch` is set
    ///
    /// # Errors
    /// Propagates any fetch failure unchanged
    pub async fn page(&self) -> Result<Cow<'_, PageHandle>> {
        if self.options.memoize_fetch {
            let page = self
                .page
                .get_or_try_init(|| self.client.fetch_page(&self.fetch_url))
                .await?;
            Ok(Cow::Borrowed(page))
        } else {
            Ok(Cow::Owned(self.client.fetch_page(&self.fetch_url).await?))
        }
    }

    /// Best-effort page title
    ///
    /// # Errors
    /// Only fails if the page cannot be fetched
    pub async fn extract_title(&self) -> Result<String> {
        let page = self.page().await?;
        Ok(extract_title(&page.html))
    }

    /// Normalized and resolved stream variants
    ///
    /// # Errors
    /// Only fails if the page cannot be fetched; a page without readable
    /// `mediaDefinitions` yields an empty list
    pub async fn extract_streams(&self) -> Result<Vec<StreamVariant>> {
        let page = self.page().await?;
        Ok(self.streams_from(&page.html).await)
    }

    /// Run the whole pipeline with a single page fetch
    ///
    /// # Errors
    /// Only fails if the page cannot be fetched
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> streamgrab_core::Result<()> {
    /// use std::sync::Arc;
    /// use streamgrab_core::{ExtractorOptions, StreamClient, StreamExtractor};
    ///
    /// let client = Arc::new(StreamClient::new()?);
    /// let extractor = StreamExtractor::new(
    ///     client,
    ///     "https://example.com/view_video?id=42",
    ///     ExtractorOptions::default(),
    /// )?;
    /// let result = extractor.extract().await?;
    /// for variant in &result.variants {
    ///     println!("{:?} {}: {}", variant.quality, variant.format, variant.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn extract(&self) -> Result<ExtractionResult> {
        let page = self.page().await?;

        let title = self
            .options
            .include_title
            .then(|| extract_title(&page.html));
        let variants = self.streams_from(&page.html).await;

        info!(
            url = %self.page_url,
            variants = variants.len(),
            "Extraction finished"
        );

        Ok(ExtractionResult {
            title,
            source_url: self.page_url.clone(),
            variants,
        })
    }

    async fn streams_from(&self, html: &str) -> Vec<StreamVariant> {
        let normalized = normalize_variants(&extract_raw_variants(html));
        resolve_variants(&self.client, normalized).await
    }
}
