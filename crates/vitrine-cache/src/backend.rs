//! In-memory tag cache backed by a DashMap.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A cached entry with TTL support.
///
/// The data is wrapped in `Arc` to allow cheap cloning on cache hits,
/// avoiding copies of potentially large listing payloads.
#[derive(Clone, Debug)]
pub struct CachedEntry {
    pub data: Arc<Vec<u8>>,
    pub cached_at: Instant,
    pub ttl: Duration,
    /// Tags this entry is registered under. Invalidating any of them
    /// removes the whole entry.
    pub tags: Arc<[String]>,
}

impl CachedEntry {
    /// Create a new cached entry registered under the given tags.
    pub fn new(data: Vec<u8>, tags: &[&str], ttl: Duration) -> Self {
        Self {
            data: Arc::new(data),
            cached_at: Instant::now(),
            ttl,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Check if this entry has expired.
    pub fn is_expired(&self) -> bool {
        self.cached_at.elapsed() > self.ttl
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Tag-scoped cache for read endpoints.
///
/// Entries are keyed by the read they serve (`banners`, `product-{id}`,
/// `social-media`, ...) and registered under one or more invalidation tags.
/// Most reads have a single tag equal to their key; the store-configuration
/// payload and the social-media listing share the `store-config` tag, so a
/// social-media write sweeps both in one call.
///
/// Entries expire lazily on read after their TTL and are removed eagerly by
/// [`TagCache::invalidate`] when a write touches a tag's underlying rows.
/// Invalidation is tag-wide; entries are never partially invalidated.
#[derive(Clone, Default)]
pub struct TagCache {
    entries: Arc<DashMap<String, CachedEntry>>,
}

impl TagCache {
    /// Create a new, empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached value for a key.
    ///
    /// Returns `Arc<Vec<u8>>` for zero-copy access to cached data.
    /// An expired entry counts as a miss and is removed on the way out.
    pub fn get(&self, key: &str) -> Option<Arc<Vec<u8>>> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                tracing::debug!(key = %key, "cache hit");
                Some(Arc::clone(&entry.data))
            }
            Some(entry) => {
                drop(entry);
                self.entries.remove(key);
                tracing::debug!(key = %key, "cache miss (expired)");
                None
            }
            None => {
                tracing::debug!(key = %key, "cache miss");
                None
            }
        }
    }

    /// Store a value under a key, registered under `tags`, with a TTL.
    pub fn put(&self, key: &str, tags: &[&str], value: Vec<u8>, ttl: Duration) {
        self.entries
            .insert(key.to_string(), CachedEntry::new(value, tags, ttl));
        tracing::debug!(key = %key, tags = ?tags, ttl_secs = %ttl.as_secs(), "cache set");
    }

    /// Invalidate every entry registered under a tag.
    pub fn invalidate(&self, tag: &str) {
        self.entries.retain(|_, entry| !entry.has_tag(tag));
        tracing::debug!(tag = %tag, "cache invalidated");
    }

    /// Invalidate a set of tags. Write handlers call this once, after the
    /// storage commit and before the response is returned.
    pub fn invalidate_all<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.invalidate(tag.as_ref());
        }
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
        }
    }
}

/// Cache statistics.
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub entries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_put_get_roundtrip() {
        let cache = TagCache::new();
        assert!(cache.get("banners").is_none());

        cache.put("banners", &["banners"], b"[]".to_vec(), HOUR);
        let hit = cache.get("banners").expect("entry should be present");
        assert_eq!(&*hit, b"[]");
    }

    #[test]
    fn test_invalidate_removes_only_that_tag() {
        let cache = TagCache::new();
        cache.put("banners", &["banners"], b"[1]".to_vec(), HOUR);
        cache.put("products", &["products"], b"[2]".to_vec(), HOUR);

        cache.invalidate("banners");
        assert!(cache.get("banners").is_none());
        assert!(cache.get("products").is_some());
    }

    #[test]
    fn test_shared_tag_sweeps_every_entry() {
        let cache = TagCache::new();
        cache.put("store-config", &["store-config"], b"cfg".to_vec(), HOUR);
        cache.put("social-media", &["store-config"], b"[]".to_vec(), HOUR);

        cache.invalidate("store-config");
        assert!(cache.get("store-config").is_none());
        assert!(cache.get("social-media").is_none());
    }

    #[test]
    fn test_invalidate_all() {
        let cache = TagCache::new();
        cache.put("products", &["products"], b"a".to_vec(), HOUR);
        cache.put("product-1", &["product-1"], b"b".to_vec(), HOUR);
        cache.put("store-config", &["store-config"], b"c".to_vec(), HOUR);

        cache.invalidate_all(["products", "product-1"]);
        assert!(cache.get("products").is_none());
        assert!(cache.get("product-1").is_none());
        assert!(cache.get("store-config").is_some());
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let cache = TagCache::new();
        cache.put("banners", &["banners"], b"[]".to_vec(), Duration::from_millis(0));
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get("banners").is_none());
        // The expired entry was removed, not left behind.
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn test_put_overwrites() {
        let cache = TagCache::new();
        cache.put("store-config", &["store-config"], b"old".to_vec(), HOUR);
        cache.put("store-config", &["store-config"], b"new".to_vec(), HOUR);
        assert_eq!(&*cache.get("store-config").unwrap(), b"new");
        assert_eq!(cache.stats().entries, 1);
    }
}
