//! Cache port.
//!
//! A process-wide key/value cache with sliding expiration: every hit resets
//! the entry's countdown to `ttl` from now, so an entry only expires after an
//! idle window with no reads. An absent and an expired entry are
//! indistinguishable to callers.

use async_trait::async_trait;
use std::time::Duration;

/// Capability interface for a TTL cache.
///
/// Created once at process start and injected into the repositories that
/// need it; concurrent `get`/`set`/`invalidate` on the same key must not
/// corrupt state, and the last write (set or invalidate) to complete wins.
#[async_trait]
pub trait Cache<V>: Send + Sync
where
    V: Clone + Send + Sync + 'static,
{
    /// Look up a key, resetting its expiry countdown on a hit.
    async fn get(&self, key: &str) -> Option<V>;

    /// Store a value under a key with the given idle window.
    async fn set(&self, key: &str, value: V, ttl: Duration);

    /// Drop a key immediately. Dropping an absent key is a no-op.
    async fn invalidate(&self, key: &str);
}

/// A no-op cache that stores nothing and always misses.
///
/// Use this to run the cached repositories with caching effectively
/// disabled, e.g. in tests that must observe storage state directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl<V> Cache<V> for NullCache
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, _key: &str) -> Option<V> {
        None
    }

    async fn set(&self, _key: &str, _value: V, _ttl: Duration) {}

    async fn invalidate(&self, _key: &str) {}
}
