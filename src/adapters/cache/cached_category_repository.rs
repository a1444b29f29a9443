//! Cached wrapper for CategoryRepository.
//!
//! Caches the full category list (60s sliding ttl) since it is read far more
//! often than it changes and is cheap to hold in memory. Detail fetches are
//! comparatively rare and always need fresh child data, so they bypass the
//! cache. Every successful write evicts the list entry; failed writes leave
//! the cache untouched so cache and storage never diverge on a partial
//! failure.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Category, NewCategory};
use crate::domain::ports::{Cache, CategoryRepository};

/// Cache key for the full category list. The only key this layer uses.
pub const ALL_CATEGORIES_KEY: &str = "all-categories";

/// Default idle window for the cached category list.
const LIST_CACHE_TTL_SECS: u64 = 60;

/// Cached category repository decorator.
///
/// Wraps any `CategoryRepository` implementation with an injected `Cache`
/// capability. The inner repository stays the source of truth for every
/// invariant check; this layer only decides what is cached and when the
/// entry is dropped (write-through-then-evict: storage commits first, the
/// eviction follows only on success).
pub struct CachedCategoryRepository<R: CategoryRepository> {
    inner: Arc<R>,
    cache: Arc<dyn Cache<Vec<Category>>>,
    ttl: Duration,
}

impl<R: CategoryRepository> CachedCategoryRepository<R> {
    /// Create a new cached category repository with the default 60s ttl.
    pub fn new(inner: Arc<R>, cache: Arc<dyn Cache<Vec<Category>>>) -> Self {
        Self::with_ttl(inner, cache, Duration::from_secs(LIST_CACHE_TTL_SECS))
    }

    /// Create with a custom ttl.
    pub fn with_ttl(
        inner: Arc<R>,
        cache: Arc<dyn Cache<Vec<Category>>>,
        ttl: Duration,
    ) -> Self {
        Self { inner, cache, ttl }
    }

    async fn evict_list(&self) {
        self.cache.invalidate(ALL_CATEGORIES_KEY).await;
    }
}

#[async_trait]
impl<R: CategoryRepository + 'static> CategoryRepository for CachedCategoryRepository<R> {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        if let Some(cached) = self.cache.get(ALL_CATEGORIES_KEY).await {
            debug!(key = ALL_CATEGORIES_KEY, "category list cache hit");
            return Ok(cached);
        }

        debug!(key = ALL_CATEGORIES_KEY, "category list cache miss");
        let categories = self.inner.list().await?;
        self.cache
            .set(ALL_CATEGORIES_KEY, categories.clone(), self.ttl)
            .await;
        Ok(categories)
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Category>> {
        // Detail reads always bypass the list cache and are never cached
        // individually.
        self.inner.get(id).await
    }

    async fn add(&self, category: &NewCategory) -> DomainResult<i64> {
        let id = self.inner.add(category).await?;
        self.evict_list().await;
        Ok(id)
    }

    async fn update(&self, category: &Category) -> DomainResult<()> {
        self.inner.update(category).await?;
        self.evict_list().await;
        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.inner.delete(id).await?;
        self.evict_list().await;
        Ok(())
    }
}
