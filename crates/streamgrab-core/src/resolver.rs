//! Redirect resolution for normalized variants
//!
//! Each variant gets one HEAD request. Requests run concurrently up to the
//! client's limit and results are joined back in input order.

use futures::stream::{self, StreamExt};
use tracing::debug;

use crate::client::StreamClient;
use crate::types::StreamVariant;

/// Replaces each variant's URL with its redirect target
///
/// Never fails: a variant whose HEAD request fails keeps its original URL.
/// Dropping the returned future cancels all in-flight HEAD requests.
pub async fn resolve_variants(
    client: &StreamClient,
    variants: Vec<StreamVariant>,
) -> Vec<StreamVariant> {
    if variants.is_empty() {
        return variants;
    }

    let limit = client.max_concurrent_resolves();
    debug!(count = variants.len(), limit, "Resolving stream URLs");

    stream::iter(variants)
        .map(|mut variant| async move {
            variant.url = client.resolve_url(&variant.url).await;
            variant
        })
        .buffered(limit)
        .collect()
        .await
}
