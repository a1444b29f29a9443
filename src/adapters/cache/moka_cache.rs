//! Moka-backed implementation of the `Cache` port.
//!
//! Each entry carries its own ttl, and a custom `Expiry` policy returns that
//! ttl from every create/read/update callback, which gives sliding
//! expiration: the countdown restarts on each hit. Concurrency semantics
//! (no corruption, last writer wins) come from moka itself.

use async_trait::async_trait;
use moka::future::Cache as InnerCache;
use moka::Expiry;
use std::time::{Duration, Instant};

use crate::domain::ports::Cache;

/// Upper bound on distinct keys; this layer caches a single well-known key,
/// so the bound exists only to satisfy moka's builder.
const MAX_CAPACITY: u64 = 64;

#[derive(Clone)]
struct Entry<V> {
    value: V,
    ttl: Duration,
}

/// Expiry policy that restarts the idle countdown on every access.
struct SlidingExpiry;

impl<K, V> Expiry<K, Entry<V>> for SlidingExpiry {
    fn expire_after_create(
        &self,
        _key: &K,
        entry: &Entry<V>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_read(
        &self,
        _key: &K,
        entry: &Entry<V>,
        _read_at: Instant,
        _duration_until_expiry: Option<Duration>,
        _last_modified_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &K,
        entry: &Entry<V>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Process-wide sliding-expiration cache.
pub struct MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    inner: InnerCache<String, Entry<V>>,
}

impl<V> MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        let inner = InnerCache::builder()
            .max_capacity(MAX_CAPACITY)
            .expire_after(SlidingExpiry)
            .build();
        Self { inner }
    }
}

impl<V> Default for MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V> Cache<V> for MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<V> {
        self.inner.get(key).await.map(|entry| entry.value)
    }

    async fn set(&self, key: &str, value: V, ttl: Duration) {
        self.inner
            .insert(key.to_string(), Entry { value, ttl })
            .await;
    }

    async fn invalidate(&self, key: &str) {
        self.inner.invalidate(key).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_and_invalidate() {
        let cache = MokaCache::new();
        cache.set("k", 7_u32, Duration::from_secs(60)).await;
        assert_eq!(cache.get("k").await, Some(7));

        cache.invalidate("k").await;
        assert_eq!(Cache::<u32>::get(&cache, "k").await, None);
    }

    #[tokio::test]
    async fn test_invalidating_absent_key_is_noop() {
        let cache = MokaCache::<u32>::new();
        cache.invalidate("nothing").await;
        assert_eq!(cache.get("nothing").await, None);
    }

    #[tokio::test]
    async fn test_entry_expires_after_idle_window() {
        let cache = MokaCache::new();
        cache.set("k", 1_u32, Duration::from_millis(100)).await;

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(cache.get("k").await, None);
    }

    #[tokio::test]
    async fn test_reads_slide_the_expiry_window() {
        let cache = MokaCache::new();
        cache.set("k", 1_u32, Duration::from_millis(500)).await;

        // Keep touching the entry more often than the ttl; it must survive
        // well past the original window.
        for _ in 0..5 {
            tokio::time::sleep(Duration::from_millis(150)).await;
            assert_eq!(cache.get("k").await, Some(1));
        }

        // Then go idle past the ttl and it expires.
        tokio::time::sleep(Duration::from_millis(900)).await;
        assert_eq!(cache.get("k").await, None);
    }

    #[tokio::test]
    async fn test_last_set_wins() {
        let cache = MokaCache::new();
        cache.set("k", 1_u32, Duration::from_secs(60)).await;
        cache.set("k", 2_u32, Duration::from_secs(60)).await;
        assert_eq!(cache.get("k").await, Some(2));
    }
}
