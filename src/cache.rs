//! Bounded cache for per-query variant sets.
//!
//! Variant generation is pure and deterministic, so a miss recomputes the
//! same set, never a different one. Eviction order only affects the hit
//! rate, hence plain FIFO.
//!
//! The cache is the only mutable state shared between concurrent queries;
//! a single coarse mutex around lookup + insert + evict keeps it trivially
//! correct.

use std::collections::VecDeque;

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};

/// Default capacity for the engine's variant cache.
pub const DEFAULT_VARIANT_CACHE_CAPACITY: usize = 1000;

type CacheKey = (String, Option<String>);

struct CacheInner {
    map: FxHashMap<CacheKey, FxHashSet<String>>,
    order: VecDeque<CacheKey>,
}

/// Bounded FIFO cache from `(query, country hint)` to a generated variant
/// set.
pub struct VariantCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

impl VariantCache {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(CacheInner {
                map: FxHashMap::default(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Look up the variant set for `(name, country)`, computing and
    /// inserting it on a miss. The oldest entry is evicted once the
    /// capacity is exceeded.
    pub fn get_or_insert_with<F>(
        &self,
        name: &str,
        country: Option<&str>,
        compute: F,
    ) -> FxHashSet<String>
    where
        F: FnOnce() -> FxHashSet<String>,
    {
        let key: CacheKey = (name.to_string(), country.map(str::to_string));
        let mut inner = self.inner.lock();
        if let Some(hit) = inner.map.get(&key) {
            return hit.clone();
        }
        let computed = compute();
        inner.map.insert(key.clone(), computed.clone());
        inner.order.push_back(key);
        while inner.order.len() > self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.map.remove(&oldest);
            }
        }
        computed
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.lock().map.len()
    }

    /// True when the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VariantCache {
    fn default() -> Self {
        Self::new(DEFAULT_VARIANT_CACHE_CAPACITY)
    }
}
