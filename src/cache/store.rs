//! In-memory cache store for API responses
//!
//! Provides a `CacheStore` that holds JSON-serializable data with expiry
//! timestamps. The store lives for the whole process session and is only
//! invalidated by TTL expiry, mirroring a per-session response cache.

use chrono::{DateTime, Duration, Utc};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Ordered sequence of string segments identifying a cache entry
///
/// Keys compare by segment order: `["products", "7"]` and `["7", "products"]`
/// are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(Vec<String>);

impl CacheKey {
    /// Builds a key from an ordered list of segments
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns the key segments in order
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

/// A stored response with its expiry window
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The cached payload as JSON
    value: serde_json::Value,
    /// When the data was cached
    cached_at: DateTime<Utc>,
    /// When the cache entry expires
    expires_at: DateTime<Utc>,
}

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug)]
pub struct CachedData<T> {
    /// The cached data
    pub data: T,
    /// When the data was originally cached
    pub cached_at: DateTime<Utc>,
    /// Whether the cache entry has expired
    pub is_expired: bool,
}

/// Manages reading and writing cached API responses
///
/// The store keeps entries in a shared map for the process lifetime. Cloning
/// a `CacheStore` yields a handle onto the same underlying map, so every
/// data client sees the same cache. Expired entries are still returned (with
/// `is_expired = true`); the data layer treats them as misses and refetches.
#[derive(Debug, Clone, Default)]
pub struct CacheStore {
    entries: Arc<Mutex<HashMap<CacheKey, CacheEntry>>>,
}

impl CacheStore {
    /// Creates a new, empty cache store
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes data to the cache with a TTL in milliseconds
    ///
    /// # Arguments
    /// * `key` - Ordered segments identifying the entry (e.g. `["products", "featured"]`)
    /// * `data` - The data to cache (must implement Serialize)
    /// * `ttl_ms` - How long the entry should be considered fresh
    pub fn write<T: Serialize>(
        &self,
        key: &CacheKey,
        data: &T,
        ttl_ms: u64,
    ) -> serde_json::Result<()> {
        let value = serde_json::to_value(data)?;
        let now = Utc::now();
        let entry = CacheEntry {
            value,
            cached_at: now,
            expires_at: now + Duration::milliseconds(ttl_ms as i64),
        };

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.clone(), entry);
        Ok(())
    }

    /// Reads data from the cache
    ///
    /// Returns `None` if the entry doesn't exist or cannot be deserialized
    /// into `T`. Returns `Some(CachedData)` with `is_expired = true` if the
    /// entry exists but its TTL has elapsed.
    pub fn read<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<CachedData<T>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let entry = entries.get(key)?;

        let data: T = serde_json::from_value(entry.value.clone()).ok()?;
        let is_expired = Utc::now() > entry.expires_at;

        Some(CachedData {
            data,
            cached_at: entry.cached_at,
            is_expired,
        })
    }

    /// Returns the number of entries currently stored, fresh or expired
    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    /// Returns true when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::thread;
    use std::time::Duration as StdDuration;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn key(segments: &[&str]) -> CacheKey {
        CacheKey::new(segments.iter().copied())
    }

    #[test]
    fn test_read_returns_none_for_missing_key() {
        let cache = CacheStore::new();

        let result: Option<CachedData<TestData>> = cache.read(&key(&["nope"]));

        assert!(result.is_none(), "Should return None for missing key");
    }

    #[test]
    fn test_read_returns_data_with_is_expired_false_for_fresh_cache() {
        let cache = CacheStore::new();
        let data = TestData {
            name: "fresh".to_string(),
            value: 100,
        };

        cache
            .write(&key(&["products", "featured"]), &data, 60_000)
            .expect("Write should succeed");

        let result: CachedData<TestData> = cache
            .read(&key(&["products", "featured"]))
            .expect("Should read fresh cache");

        assert_eq!(result.data, data);
        assert!(!result.is_expired, "Fresh cache should not be expired");
    }

    #[test]
    fn test_read_returns_data_with_is_expired_true_after_ttl() {
        let cache = CacheStore::new();
        let data = TestData {
            name: "expired".to_string(),
            value: 0,
        };

        // Write with 0ms TTL - should expire immediately
        cache
            .write(&key(&["categories"]), &data, 0)
            .expect("Write should succeed");

        // Small delay to ensure expiry
        thread::sleep(StdDuration::from_millis(10));

        let result: CachedData<TestData> = cache
            .read(&key(&["categories"]))
            .expect("Should read expired cache");

        assert_eq!(result.data, data);
        assert!(result.is_expired, "Cache with 0 TTL should be expired");
    }

    #[test]
    fn test_cache_keys_are_order_sensitive() {
        let cache = CacheStore::new();
        let data = TestData {
            name: "ordered".to_string(),
            value: 1,
        };

        cache
            .write(&key(&["products", "7"]), &data, 60_000)
            .expect("Write should succeed");

        let reversed: Option<CachedData<TestData>> = cache.read(&key(&["7", "products"]));
        assert!(reversed.is_none(), "Reversed key should not match");

        let ordered: Option<CachedData<TestData>> = cache.read(&key(&["products", "7"]));
        assert!(ordered.is_some(), "Original key order should match");
    }

    #[test]
    fn test_cloned_store_shares_entries() {
        let cache = CacheStore::new();
        let handle = cache.clone();
        let data = TestData {
            name: "shared".to_string(),
            value: 7,
        };

        cache
            .write(&key(&["shared"]), &data, 60_000)
            .expect("Write should succeed");

        let result: CachedData<TestData> = handle
            .read(&key(&["shared"]))
            .expect("Clone should see the same entries");
        assert_eq!(result.data, data);
    }

    #[test]
    fn test_overwrite_existing_entry() {
        let cache = CacheStore::new();
        let data1 = TestData {
            name: "first".to_string(),
            value: 1,
        };
        let data2 = TestData {
            name: "second".to_string(),
            value: 2,
        };

        cache
            .write(&key(&["overwrite"]), &data1, 60_000)
            .expect("First write should succeed");
        cache
            .write(&key(&["overwrite"]), &data2, 60_000)
            .expect("Second write should succeed");

        let result: CachedData<TestData> = cache
            .read(&key(&["overwrite"]))
            .expect("Should read cache");

        assert_eq!(result.data, data2, "Cache should contain latest data");
        assert_eq!(cache.len(), 1, "Overwrite should not add a second entry");
    }

    #[test]
    fn test_cached_at_timestamp_is_recorded() {
        let cache = CacheStore::new();
        let data = TestData {
            name: "timestamp".to_string(),
            value: 999,
        };

        let before = Utc::now();
        cache
            .write(&key(&["timestamp"]), &data, 60_000)
            .expect("Write should succeed");
        let after = Utc::now();

        let result: CachedData<TestData> = cache
            .read(&key(&["timestamp"]))
            .expect("Should read cache");

        assert!(result.cached_at >= before, "cached_at should be after write started");
        assert!(result.cached_at <= after, "cached_at should be before write finished");
    }

    #[test]
    fn test_read_with_wrong_type_returns_none() {
        let cache = CacheStore::new();
        let data = TestData {
            name: "typed".to_string(),
            value: 3,
        };

        cache
            .write(&key(&["typed"]), &data, 60_000)
            .expect("Write should succeed");

        let result: Option<CachedData<Vec<String>>> = cache.read(&key(&["typed"]));
        assert!(result.is_none(), "Mismatched type should read as None");
    }

    #[test]
    fn test_cache_key_display_joins_segments() {
        let k = key(&["products", "featured"]);
        assert_eq!(k.to_string(), "products/featured");
        assert_eq!(k.segments().len(), 2);
    }
}
