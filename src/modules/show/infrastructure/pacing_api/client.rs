use super::dto::{into_shows, AnalyzedVideoDto, ShowDto};
use crate::modules::ingestion::domain::{AnalyzedVideo, IngestionBackend};
use crate::modules::show::domain::{
    entities::{Show, ShowId},
    repositories::ShowCatalogRepository,
};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::http_client::{RateLimitClient, RetryPolicy};
use crate::shared::utils::logger::LogContext;
use async_trait::async_trait;

/// REST client for the pacing score backend.
///
/// Reads go through a client with a short retry policy. Ingestion triggers use
/// a separate client that never retries: a crawl is expensive and not idempotent.
pub struct PacingApiClient {
    http_client: RateLimitClient,
    command_client: RateLimitClient,
    base_url: String,
}

impl PacingApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_clients(
            RateLimitClient::for_pacing_api(),
            RateLimitClient::new(
                "PacingAPI",
                RetryPolicy::none(),
                RateLimitClient::create_rate_limiter(1.0, 2),
            ),
            base_url,
        )
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Create client with custom HTTP clients (for testing)
    pub fn with_clients(
        http_client: RateLimitClient,
        command_client: RateLimitClient,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            command_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn build_url_with_params(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let query: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        if query.is_empty() {
            self.build_url(endpoint)
        } else {
            format!("{}?{}", self.build_url(endpoint), query.join("&"))
        }
    }

    async fn get_shows(&self, url: &str) -> AppResult<Vec<Show>> {
        let rows: Vec<ShowDto> = self.http_client.get(url).await?;
        Ok(into_shows(rows))
    }

    /// Server-side score filter; `max_score` is optional
    pub async fn filter_by_score(&self, min_score: f64, max_score: Option<f64>) -> AppResult<Vec<Show>> {
        let mut params = vec![("minScore", min_score.to_string())];
        if let Some(max) = max_score {
            params.push(("maxScore", max.to_string()));
        }
        let url = self.build_url_with_params("/shows", &params);
        self.get_shows(&url).await
    }

    /// Server-side exact age filter
    pub async fn filter_by_age(&self, age: &str) -> AppResult<Vec<Show>> {
        let url = self.build_url_with_params("/shows", &[("age", age.to_string())]);
        self.get_shows(&url).await
    }
}

#[async_trait]
impl ShowCatalogRepository for PacingApiClient {
    async fn fetch_all_shows(&self) -> AppResult<Vec<Show>> {
        let shows = self.get_shows(&self.build_url("/shows")).await?;
        log::info!("PacingAPI: Loaded {} shows", shows.len());
        Ok(shows)
    }

    async fn search_shows(&self, term: &str) -> AppResult<Vec<Show>> {
        LogContext::search_operation(term, Some("PacingAPI"), None);
        let url = self.build_url_with_params("/shows", &[("search", term.to_string())]);
        let shows = self.get_shows(&url).await?;
        LogContext::search_operation(term, Some("PacingAPI"), Some(shows.len()));
        Ok(shows)
    }

    async fn get_show(&self, id: &ShowId) -> AppResult<Option<Show>> {
        let url = self.build_url(&format!(
            "/shows/{}",
            urlencoding::encode(&id.to_string())
        ));

        let row: Option<ShowDto> = match self.http_client.get(&url).await {
            Ok(row) => row,
            Err(AppError::NotFound(_)) => {
                log::info!("PacingAPI: No show found for ID '{}'", id);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        Ok(row.and_then(|row| match row.into_show() {
            Ok(show) => Some(show),
            Err(rejected) => {
                log::warn!("PacingAPI: Ignoring show '{}': {}", id, rejected);
                None
            }
        }))
    }
}

#[async_trait]
impl IngestionBackend for PacingApiClient {
    async fn crawl_and_analyze(&self, term: &str) -> AppResult<Vec<AnalyzedVideo>> {
        let url =
            self.build_url_with_params("/analysis/crawl", &[("searchTerm", term.to_string())]);
        let rows: Vec<AnalyzedVideoDto> = self.command_client.post_json(&url, None).await?;

        let total = rows.len();
        let videos: Vec<AnalyzedVideo> = rows
            .into_iter()
            .filter_map(AnalyzedVideoDto::into_video)
            .collect();
        if videos.len() < total {
            log::warn!(
                "PacingAPI: {} crawl results had no video id",
                total - videos.len()
            );
        }
        Ok(videos)
    }

    async fn populate_catalog(&self) -> AppResult<String> {
        let message = self
            .command_client
            .post_text(&self.build_url("/analysis/populate"))
            .await?;
        Ok(message.trim().to_string())
    }
}
