use crate::modules::provider::domain::entities::ShowSummary;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Free-text lookup against an external metadata source
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn fetch_suggestions(&self, term: &str) -> AppResult<Vec<ShowSummary>>;
}
