/// Test helper functions and client builders
use pacing_lib::modules::{provider::TmdbAdapter, show::PacingApiClient};
use pacing_lib::shared::infrastructure::http_client::{RateLimitClient, RetryPolicy};

/// HTTP client that never waits and never retries
pub fn fast_client(name: &str) -> RateLimitClient {
    RateLimitClient::new(
        name,
        RetryPolicy::none(),
        RateLimitClient::create_rate_limiter(1000.0, 100),
    )
}

/// Backend client pointed at a stub server, without retries on either side
pub fn pacing_client(base_url: &str) -> PacingApiClient {
    PacingApiClient::with_clients(fast_client("PacingAPI"), fast_client("PacingAPI"), base_url)
}

pub fn tmdb_adapter(base_url: &str) -> TmdbAdapter {
    TmdbAdapter::with_client(fast_client("TMDB"), "test-key".to_string(), "fr-FR".to_string())
        .with_base_url(base_url)
}

pub fn titles(shows: &[pacing_lib::modules::show::Show]) -> Vec<String> {
    shows.iter().map(|s| s.title.clone()).collect()
}
