//! Bounded memoization of normalized token sequences.
//!
//! Ranking a catalog compares one reference text against every candidate,
//! so the same strings are normalized repeatedly. `Normalizer` caches the
//! token sequence per distinct input string up to a fixed capacity. The
//! cache is a pure optimization: enabled or disabled, the tokens returned
//! for a given input are identical.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Maximum number of distinct input strings retained.
const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Memoizing front-end to [`normalize`](super::normalize).
///
/// Safe to share across threads; the cache is mutex-guarded, and lock
/// contention only costs latency. On overflow the whole map is dropped
/// rather than tracking recency.
#[derive(Debug)]
pub struct Normalizer {
    cache: Option<Mutex<HashMap<String, Arc<[String]>>>>,
    capacity: usize,
}

impl Normalizer {
    /// Caching normalizer with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Caching normalizer bounded to `capacity` distinct inputs.
    /// A capacity of zero disables caching entirely.
    pub fn with_capacity(capacity: usize) -> Self {
        let cache = (capacity > 0).then(|| Mutex::new(HashMap::new()));
        Self { cache, capacity }
    }

    /// Normalizer that always recomputes.
    pub fn uncached() -> Self {
        Self::with_capacity(0)
    }

    /// Tokens for `text`, served from the cache when possible.
    pub fn tokens(&self, text: &str) -> Arc<[String]> {
        let Some(cache) = &self.cache else {
            return super::normalize(text).into();
        };
        // A poisoned lock falls back to recomputing; the cache is only
        // an optimization and must never change observable results.
        let Ok(mut map) = cache.lock() else {
            return super::normalize(text).into();
        };
        if let Some(hit) = map.get(text) {
            return Arc::clone(hit);
        }
        let tokens: Arc<[String]> = super::normalize(text).into();
        if map.len() >= self.capacity {
            map.clear();
        }
        map.insert(text.to_string(), Arc::clone(&tokens));
        tokens
    }

    /// Number of currently cached inputs.
    pub fn cached_entries(&self) -> usize {
        self.cache
            .as_ref()
            .and_then(|c| c.lock().ok())
            .map(|m| m.len())
            .unwrap_or(0)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
