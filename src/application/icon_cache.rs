//! Icon Cache
//!
//! Flat memoization map from mint address to decoded icon, keyed to the
//! current dataset generation. Unbounded by design: no TTL, no eviction.
//! The cache is cleared wholesale at the start of every refresh, and
//! clearing bumps the generation so an icon lookup that started against an
//! older dataset can be detected and discarded instead of repopulating a
//! freshly cleared cache.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::TokenIcon;

#[derive(Debug, Default)]
struct CacheInner {
    generation: u64,
    entries: HashMap<String, Arc<TokenIcon>>,
}

/// Generation-tagged icon memoization map.
#[derive(Debug, Default)]
pub struct IconCache {
    inner: Mutex<CacheInner>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current dataset generation.
    pub async fn generation(&self) -> u64 {
        self.inner.lock().await.generation
    }

    /// Cached icon for a mint, if present.
    pub async fn get(&self, mint: &str) -> Option<Arc<TokenIcon>> {
        self.inner.lock().await.entries.get(mint).cloned()
    }

    /// Insert an icon resolved against `generation`. Returns false and drops
    /// the icon if a refresh has cleared the cache since the lookup started.
    pub async fn insert_if_current(
        &self,
        generation: u64,
        mint: &str,
        icon: Arc<TokenIcon>,
    ) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            return false;
        }
        inner.entries.insert(mint.to_string(), icon);
        true
    }

    /// Drop every entry and advance the generation. Returns the new
    /// generation.
    pub async fn clear(&self) -> u64 {
        let mut inner = self.inner.lock().await;
        inner.entries.clear();
        inner.generation += 1;
        inner.generation
    }

    /// Number of cached icons.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.entries.is_empty()
    }
}
