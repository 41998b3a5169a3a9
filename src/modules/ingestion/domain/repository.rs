use super::entities::AnalyzedVideo;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Long-running ingestion triggers exposed by the backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngestionBackend: Send + Sync {
    /// Crawl for `term`, analyze what was found and return the scored videos
    async fn crawl_and_analyze(&self, term: &str) -> AppResult<Vec<AnalyzedVideo>>;

    /// Bulk-populate the catalog; returns the backend's status message
    async fn populate_catalog(&self) -> AppResult<String>;
}
