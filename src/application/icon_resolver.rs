//! Icon Resolver
//!
//! Lazy per-mint icon resolution: metadata lookup, optional off-chain URI
//! hop, image download, decode, cache. Failure at any step collapses to
//! `None` - the caller renders a fallback label, never an error dialog.

use std::sync::Arc;

use thiserror::Error;

use super::icon_cache::IconCache;
use crate::domain::{IconDecodeError, TokenIcon};
use crate::ports::icon_source::{IconSource, IconSourceError};

/// Internal resolution error; never escapes [`IconResolver::resolve_icon`].
#[derive(Debug, Error)]
pub enum IconResolveError {
    #[error(transparent)]
    Source(#[from] IconSourceError),

    #[error(transparent)]
    Decode(#[from] IconDecodeError),
}

/// Resolves token icons through an [`IconSource`], memoizing results in a
/// shared [`IconCache`] for the lifetime of the current dataset.
#[derive(Debug)]
pub struct IconResolver<S: IconSource> {
    source: S,
    cache: Arc<IconCache>,
}

impl<S: IconSource> IconResolver<S> {
    pub fn new(source: S, cache: Arc<IconCache>) -> Self {
        Self { source, cache }
    }

    /// Shared cache handle.
    pub fn cache(&self) -> &Arc<IconCache> {
        &self.cache
    }

    /// Underlying source, mainly for call inspection in tests.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve the icon for a mint.
    ///
    /// A cache hit returns immediately with no network calls. On a miss the
    /// resolver walks the metadata chain and memoizes the decoded icon,
    /// unless a refresh cleared the cache while the lookup was in flight, in
    /// which case the result is discarded as stale. `None` covers every
    /// failure mode; the distinction between "not found" and a transport or
    /// decode error is intentionally not surfaced here.
    pub async fn resolve_icon(&self, mint: &str) -> Option<Arc<TokenIcon>> {
        if let Some(icon) = self.cache.get(mint).await {
            return Some(icon);
        }

        let generation = self.cache.generation().await;

        match self.resolve_uncached(mint).await {
            Ok(Some(icon)) => {
                let icon = Arc::new(icon);
                if !self
                    .cache
                    .insert_if_current(generation, mint, Arc::clone(&icon))
                    .await
                {
                    tracing::debug!(mint, "icon resolved against a stale dataset, discarding");
                    return None;
                }
                Some(icon)
            }
            Ok(None) => {
                tracing::debug!(mint, "no icon found");
                None
            }
            Err(e) => {
                tracing::debug!(mint, error = %e, "icon resolution failed");
                None
            }
        }
    }

    async fn resolve_uncached(&self, mint: &str) -> Result<Option<TokenIcon>, IconResolveError> {
        let entry = match self.source.token_metadata(mint).await? {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let offchain = match entry.off_chain_metadata {
            Some(doc) => doc,
            None => match entry.off_chain_uri {
                Some(uri) => self.source.offchain_metadata(&uri).await?,
                None => return Ok(None),
            },
        };

        let image_url = match offchain.image {
            Some(url) => url,
            None => return Ok(None),
        };

        let bytes = self.source.image_bytes(&image_url).await?;
        Ok(Some(TokenIcon::from_bytes(mint, &bytes)?))
    }
}
