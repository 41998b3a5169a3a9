//! Suggestion cache tests
//!
//! Bounded FIFO behavior of the store and of the caching decorator around a
//! suggestion provider.

mod utils;

use async_trait::async_trait;
use mockall::mock;
use pacing_lib::modules::provider::{
    domain::entities::ShowSummary, CachingSuggestionProvider, SuggestionOutcome,
    SuggestionProvider, SuggestionService,
};
use pacing_lib::shared::utils::{BoundedFifoCache, ManualClock};
use pacing_lib::{AppError, AppResult};
use std::sync::Arc;
use std::time::Duration;
use utils::factories::summary;

mock! {
    pub Provider {}

    #[async_trait]
    impl SuggestionProvider for Provider {
        async fn fetch_suggestions(&self, term: &str) -> AppResult<Vec<ShowSummary>>;
    }
}

fn echo_provider(times: usize) -> MockProvider {
    let mut provider = MockProvider::new();
    provider
        .expect_fetch_suggestions()
        .times(times)
        .returning(|term| Ok(vec![summary(1, term)]));
    provider
}

#[test]
fn test_store_holds_at_most_capacity_entries() {
    let mut cache = BoundedFifoCache::new(100);
    for i in 0..101 {
        cache.insert(format!("query-{}", i), i);
    }

    assert_eq!(cache.len(), 100);
    assert!(!cache.contains(&"query-0".to_string()));
    assert!(cache.contains(&"query-1".to_string()));
    assert!(cache.contains(&"query-100".to_string()));
    assert_eq!(cache.keys().next().map(String::as_str), Some("query-1"));
    assert_eq!(cache.stats().evictions, 1);
}

#[test]
fn test_store_eviction_ignores_reads() {
    let mut cache = BoundedFifoCache::new(3);
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.insert("c", 3);

    for _ in 0..5 {
        assert_eq!(cache.get(&"a"), Some(1));
    }
    assert_eq!(cache.insert("d", 4), Some("a"));
    assert_eq!(cache.insert("e", 5), Some("b"));
    assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec!["c", "d", "e"]);
}

#[test]
fn test_store_ttl_with_manual_clock() {
    let clock = ManualClock::new();
    let mut cache = BoundedFifoCache::with_clock(
        10,
        Some(Duration::from_secs(300)),
        Arc::new(clock.clone()),
    );
    cache.insert("bluey".to_string(), vec![1, 2]);

    clock.advance(Duration::from_secs(300));
    assert_eq!(cache.get(&"bluey".to_string()), Some(vec![1, 2]));

    clock.advance(Duration::from_secs(1));
    assert_eq!(cache.get(&"bluey".to_string()), None);
    assert_eq!(cache.len(), 0);
}

#[tokio::test]
async fn test_repeated_query_is_served_from_cache() {
    let provider = CachingSuggestionProvider::new(Arc::new(echo_provider(1)), 100);

    let first = provider.fetch_suggestions("petit ours").await.unwrap();
    let second = provider.fetch_suggestions("petit ours").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first[0].name, "petit ours");
    assert!(provider.is_cached("petit ours").await);
}

#[tokio::test]
async fn test_hundred_and_first_query_evicts_the_first() {
    // 101 distinct queries, then query-0 again: 102 inner calls in total
    let provider = CachingSuggestionProvider::new(Arc::new(echo_provider(102)), 100);

    for i in 0..101 {
        provider.get_or_fetch(&format!("query-{}", i)).await.unwrap();
    }
    assert_eq!(provider.len().await, 100);
    assert!(!provider.is_cached("query-0").await);
    assert!(provider.is_cached("query-1").await);

    // query-1 is still cached and must not reach the inner provider
    provider.get_or_fetch("query-1").await.unwrap();
    provider.get_or_fetch("query-0").await.unwrap();
    assert!(provider.is_cached("query-0").await);
    assert!(!provider.is_cached("query-1").await);
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let mut inner = MockProvider::new();
    let mut calls = 0;
    inner.expect_fetch_suggestions().times(2).returning(move |term| {
        calls += 1;
        if calls == 1 {
            Err(AppError::ExternalServiceError(
                "TMDB returned error: 503".to_string(),
            ))
        } else {
            Ok(vec![summary(7, term)])
        }
    });
    let provider = CachingSuggestionProvider::new(Arc::new(inner), 100);

    let err = provider.get_or_fetch("bluey").await.unwrap_err();
    assert!(err.is_external());
    assert!(!provider.is_cached("bluey").await);

    let shows = provider.get_or_fetch("bluey").await.unwrap();
    assert_eq!(shows[0].id, 7);
    assert!(provider.is_cached("bluey").await);
}

#[tokio::test]
async fn test_cache_is_transparent() {
    let direct = echo_provider(4);
    let cached = CachingSuggestionProvider::new(Arc::new(echo_provider(3)), 100);

    for query in ["bluey", "Bluey", "bluey ", "bluey"] {
        assert_eq!(
            cached.fetch_suggestions(query).await.unwrap(),
            direct.fetch_suggestions(query).await.unwrap()
        );
    }
}

#[tokio::test]
async fn test_blank_query_short_circuits() {
    let provider = CachingSuggestionProvider::new(Arc::new(echo_provider(0)), 100);
    assert!(provider.get_or_fetch("   ").await.unwrap().is_empty());
    assert_eq!(provider.len().await, 0);
}

/// Answers "blu" slowly and everything else quickly
struct TypingProvider;

#[async_trait]
impl SuggestionProvider for TypingProvider {
    async fn fetch_suggestions(&self, term: &str) -> AppResult<Vec<ShowSummary>> {
        let delay = if term == "blu" { 500 } else { 50 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(vec![summary(1, term)])
    }
}

#[tokio::test(start_paused = true)]
async fn test_stale_suggestions_are_superseded() {
    let cached = Arc::new(CachingSuggestionProvider::new(Arc::new(TypingProvider), 100));
    let service = SuggestionService::new(cached.clone());

    // "blu" is typed first but answers last
    let (stale, latest) = tokio::join!(service.suggest("blu"), service.suggest("bluey"));

    assert_eq!(stale.unwrap(), SuggestionOutcome::Superseded);
    assert_eq!(
        latest.unwrap(),
        SuggestionOutcome::Applied(vec![summary(1, "bluey")])
    );
    assert!(cached.is_cached("blu").await);

    // typed again, the cached answer is now current
    assert_eq!(
        service.suggest("blu").await.unwrap(),
        SuggestionOutcome::Applied(vec![summary(1, "blu")])
    );
}
