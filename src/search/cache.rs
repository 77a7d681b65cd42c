//! Result cache
//!
//! Maps a (content fingerprint, query) pair to a previously obtained result
//! so identical work is never resubmitted. Because the document bytes are
//! part of the key, entries can never go stale; they only leave under
//! capacity pressure or an explicit clear.
//!
//! Eviction is insertion-ordered (a bounded history), not access-ordered:
//! when the cache is full, the oldest-inserted key is dropped regardless of
//! how recently it was read.
//!
//! # Thread Safety
//!
//! Shared across invocations behind `tokio::sync::RwLock`; writes are
//! last-write-wins.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::RwLock;

use super::types::SearchResult;

/// Default capacity, in entries
pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Cache key for a (fingerprint, query) pair
///
/// The fingerprint is a fixed-width hex digest, so the separator cannot
/// collide with it.
pub fn cache_key(fingerprint: &str, query: &str) -> String {
    format!("{fingerprint}-{query}")
}

/// Bounded cache of search results, cheaply cloneable and shared
#[derive(Clone)]
pub struct ResultCache {
    inner: Arc<RwLock<ResultCacheInner>>,
}

struct ResultCacheInner {
    entries: HashMap<String, SearchResult>,
    /// Keys in insertion order, oldest first
    order: VecDeque<String>,
    capacity: usize,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl ResultCache {
    /// Create a cache bounded to `capacity` entries (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ResultCacheInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
                capacity: capacity.max(1),
            })),
        }
    }

    /// Look up a cached result
    pub async fn get(&self, key: &str) -> Option<SearchResult> {
        let inner = self.inner.read().await;
        inner.entries.get(key).cloned()
    }

    /// Insert a result, evicting the oldest-inserted entry past capacity
    ///
    /// Re-inserting an existing key replaces its value without changing its
    /// position in the eviction order.
    pub async fn put(&self, key: String, value: SearchResult) {
        let mut inner = self.inner.write().await;

        if inner.entries.insert(key.clone(), value).is_none() {
            inner.order.push_back(key);
        }

        while inner.entries.len() > inner.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
                tracing::debug!(key = %oldest, "Evicted oldest cached search result");
            } else {
                break;
            }
        }
    }

    /// Drop every entry
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.entries.clear();
        inner.order.clear();
    }

    /// Number of cached entries
    pub async fn len(&self) -> usize {
        let inner = self.inner.read().await;
        inner.entries.len()
    }

    /// Whether the cache is empty
    pub async fn is_empty(&self) -> bool {
        let inner = self.inner.read().await;
        inner.entries.is_empty()
    }
}
