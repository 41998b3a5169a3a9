use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::provider::domain::{entities::ShowSummary, repositories::SuggestionProvider};
use crate::shared::{
    errors::AppResult,
    utils::{bounded_cache::BoundedFifoCache, logger::LogContext, FifoCacheStats},
};

pub const DEFAULT_SUGGESTION_CAPACITY: usize = 100;

/// Decorator that memoizes suggestion lookups in a bounded FIFO cache.
///
/// Keys are the exact query string. Only successful lookups are stored, so a
/// failed call is retried the next time the same query comes in. Presence or
/// absence of the cache never changes what a caller gets back.
pub struct CachingSuggestionProvider {
    /// The wrapped provider
    inner: Arc<dyn SuggestionProvider>,
    cache: Mutex<BoundedFifoCache<String, Vec<ShowSummary>>>,
}

impl CachingSuggestionProvider {
    pub fn new(inner: Arc<dyn SuggestionProvider>, capacity: usize) -> Self {
        Self::with_cache(inner, BoundedFifoCache::new(capacity))
    }

    /// Use a pre-built store (custom clock or TTL)
    pub fn with_cache(
        inner: Arc<dyn SuggestionProvider>,
        cache: BoundedFifoCache<String, Vec<ShowSummary>>,
    ) -> Self {
        Self {
            inner,
            cache: Mutex::new(cache),
        }
    }

    /// Cached suggestions for `query`, fetching and storing them on a miss.
    /// Blank queries answer an empty list without any call.
    pub async fn get_or_fetch(&self, query: &str) -> AppResult<Vec<ShowSummary>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let key = query.to_string();
        if let Some(cached) = self.cache.lock().await.get(&key) {
            LogContext::cache_event("suggestions", query, true);
            return Ok(cached);
        }
        LogContext::cache_event("suggestions", query, false);

        let results = self.inner.fetch_suggestions(query).await?;

        if let Some(evicted) = self.cache.lock().await.insert(key, results.clone()) {
            tracing::debug!("Suggestion cache full, evicted '{}'", evicted);
        }

        Ok(results)
    }

    pub async fn is_cached(&self, query: &str) -> bool {
        self.cache.lock().await.contains(&query.to_string())
    }

    pub async fn len(&self) -> usize {
        self.cache.lock().await.len()
    }

    pub async fn clear(&self) {
        self.cache.lock().await.clear();
    }

    pub async fn stats(&self) -> FifoCacheStats {
        self.cache.lock().await.stats()
    }
}

#[async_trait]
impl SuggestionProvider for CachingSuggestionProvider {
    async fn fetch_suggestions(&self, term: &str) -> AppResult<Vec<ShowSummary>> {
        self.get_or_fetch(term).await
    }
}
