//! TTL cache with lazy eviction.

use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// Default entry lifetime: 5 minutes.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(5 * 60);

struct CacheEntry<V> {
    value: V,
    inserted: Instant,
}

/// A keyed store mapping each key to a value and its insertion time.
///
/// There is no background sweep: expiry is a pure function of "now"
/// evaluated on `get`, which evicts the stale entry and reports a miss.
/// `set` always overwrites. Safe under cooperative scheduling only;
/// parallel sharing needs external synchronization.
pub struct TtlCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    max_age: Duration,
}

impl<V> TtlCache<V> {
    /// Create a cache with the default 5-minute lifetime.
    pub fn new() -> Self {
        Self::with_max_age(DEFAULT_MAX_AGE)
    }

    /// Create a cache with a custom entry lifetime.
    pub fn with_max_age(max_age: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            max_age,
        }
    }

    /// Look up a key, evicting it first if it has outlived `max_age`.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.inserted.elapsed() > self.max_age,
            None => return None,
        };
        if expired {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Insert or overwrite a value, restarting its lifetime.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                inserted: Instant::now(),
            },
        );
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, expired ones included until read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_hit_just_inside_max_age() {
        let mut cache = TtlCache::with_max_age(Duration::from_millis(1000));
        cache.set("k", "v");

        tokio::time::advance(Duration::from_millis(999)).await;
        assert_eq!(cache.get("k"), Some(&"v"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_is_evicted_on_read() {
        let mut cache = TtlCache::with_max_age(Duration::from_millis(1000));
        cache.set("k", "v");

        tokio::time::advance(Duration::from_millis(1001)).await;
        assert_eq!(cache.get("k"), None);
        // Eviction actually removed the key.
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_overwrites_and_restarts_lifetime() {
        let mut cache = TtlCache::with_max_age(Duration::from_millis(1000));
        cache.set("k", 1);

        tokio::time::advance(Duration::from_millis(900)).await;
        cache.set("k", 2);

        tokio::time::advance(Duration::from_millis(900)).await;
        assert_eq!(cache.get("k"), Some(&2));
    }

    #[tokio::test]
    async fn test_clear_empties_the_store() {
        let mut cache = TtlCache::new();
        cache.set("a", 1);
        cache.set("b", 2);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get("a"), None);
    }
}
