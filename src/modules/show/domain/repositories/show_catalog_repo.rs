use crate::modules::show::domain::entities::{Show, ShowId};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Read access to the pacing score backend's catalog.
///
/// Implementations return shows already validated at the wire boundary.
/// Failures are surfaced as-is; callers decide how to present them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShowCatalogRepository: Send + Sync {
    /// Full catalog listing
    async fn fetch_all_shows(&self) -> AppResult<Vec<Show>>;

    /// Server-side title search
    async fn search_shows(&self, term: &str) -> AppResult<Vec<Show>>;

    /// Single show, `None` when the backend does not know the id
    async fn get_show(&self, id: &ShowId) -> AppResult<Option<Show>>;
}
