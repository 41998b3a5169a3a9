use crate::modules::show::domain::{
    entities::{Show, ShowId},
    repositories::ShowCatalogRepository,
    services::{apply_filters, CatalogStats, FilterCriteria, RequestSequencer},
};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::TimedOperation;
use crate::{log_debug, log_info};
use std::sync::Arc;
use tokio::sync::RwLock;

const RECENT_TITLE: &str = "Analyses Récentes";

/// What became of a search once its response arrived
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The response was current and now backs the catalog
    Applied(Vec<Show>),
    /// A newer search was issued meanwhile; the response was dropped
    Superseded,
}

/// Holds the session's catalog and mediates every backend read that replaces it
pub struct ShowCatalogService {
    repository: Arc<dyn ShowCatalogRepository>,
    catalog: RwLock<Vec<Show>>,
    sequencer: RequestSequencer,
}

impl ShowCatalogService {
    pub fn new(repository: Arc<dyn ShowCatalogRepository>) -> Self {
        Self {
            repository,
            catalog: RwLock::new(Vec::new()),
            sequencer: RequestSequencer::new(),
        }
    }

    /// Replace the catalog with the full listing; returns the number of shows.
    /// On failure the previous catalog is kept and the error is returned as-is.
    pub async fn load_catalog(&self) -> AppResult<usize> {
        let timer = TimedOperation::new("load_catalog");
        let outcome = self.replace_with(None).await?;
        let count = match &outcome {
            SearchOutcome::Applied(shows) => shows.len(),
            SearchOutcome::Superseded => self.catalog.read().await.len(),
        };
        timer.finish_with_info(&format!("{} shows", count));
        Ok(count)
    }

    /// Server-side search; a blank term reloads the full listing.
    ///
    /// Overlapping searches are not cancelled. Whichever was issued last wins,
    /// and older responses (successes and failures alike) come back as
    /// `SearchOutcome::Superseded` without touching the catalog.
    pub async fn search(&self, term: &str) -> AppResult<SearchOutcome> {
        let term = term.trim();
        self.replace_with((!term.is_empty()).then_some(term)).await
    }

    async fn replace_with(&self, term: Option<&str>) -> AppResult<SearchOutcome> {
        let ticket = self.sequencer.begin();

        let result = match term {
            Some(term) => self.repository.search_shows(term).await,
            None => self.repository.fetch_all_shows().await,
        };

        // checked under the write lock so a newer response cannot be overwritten
        let mut catalog = self.catalog.write().await;
        if !self.sequencer.is_latest(ticket) {
            log_debug!(
                "Search {:?} superseded (generation {})",
                term,
                ticket.generation()
            );
            return Ok(SearchOutcome::Superseded);
        }

        let shows = result?;
        log_info!(
            "Catalog replaced with {} shows{}",
            shows.len(),
            term.map(|t| format!(" for '{}'", t)).unwrap_or_default()
        );
        *catalog = shows.clone();
        Ok(SearchOutcome::Applied(shows))
    }

    pub async fn catalog(&self) -> Vec<Show> {
        self.catalog.read().await.clone()
    }

    /// Client-side filtering over the current catalog
    pub async fn filtered(&self, criteria: &FilterCriteria) -> Vec<Show> {
        let catalog = self.catalog.read().await;
        apply_filters(&catalog, criteria)
    }

    pub async fn stats(&self) -> CatalogStats {
        CatalogStats::compute(&self.catalog.read().await)
    }

    /// Looks in the loaded catalog first, then asks the backend
    pub async fn get_show(&self, id: &ShowId) -> AppResult<Option<Show>> {
        if let Some(show) = self.catalog.read().await.iter().find(|s| &s.id == id) {
            return Ok(Some(show.clone()));
        }
        self.repository.get_show(id).await
    }

    /// Heading for the results grid
    pub fn results_title(criteria: &FilterCriteria) -> String {
        let term = criteria.search_term.trim();
        if term.is_empty() {
            RECENT_TITLE.to_string()
        } else {
            format!("Recherche : {}", term)
        }
    }
}
