pub mod modules;
pub mod shared;

use modules::{
    ingestion::{IngestionBackend, IngestionService},
    provider::{
        CachingSuggestionProvider, ImageUrlCache, SuggestionOutcome, SuggestionProvider,
        SuggestionService, TmdbAdapter,
    },
    show::{
        domain::{repositories::ShowCatalogRepository, services::debounced_search, CriteriaChange},
        PacingApiClient, ShowCatalogService,
    },
};
use shared::{utils::logger::init_logger, AppConfig};
use std::sync::Arc;

pub use shared::errors::{AppError, AppResult};

/// Wired services for one session.
///
/// Built once at startup and handed to whatever UI layer hosts the crate.
pub struct PacingApp {
    pub config: AppConfig,
    pub catalog: Arc<ShowCatalogService>,
    pub ingestion: Arc<IngestionService>,
    /// `None` when no TMDB key is configured
    pub suggestions: Option<Arc<SuggestionService>>,
    pub images: Arc<ImageUrlCache>,
}

impl PacingApp {
    /// Load `.env`, initialise logging, read configuration and wire the services
    pub fn bootstrap() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        init_logger();

        let config = AppConfig::from_env().map_err(|e| {
            log_error!("Invalid configuration: {}", e);
            e
        })?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: AppConfig) -> Self {
        log::info!("Using pacing backend at {}", config.api_base_url);

        // One PacingApiClient backs both the catalog and ingestion ports
        let api_client = Arc::new(PacingApiClient::from_config(&config));
        let catalog_repo: Arc<dyn ShowCatalogRepository> = api_client.clone();
        let ingestion_backend: Arc<dyn IngestionBackend> = api_client;

        let suggestions = match &config.tmdb_api_key {
            Some(api_key) => {
                let tmdb: Arc<dyn SuggestionProvider> = Arc::new(TmdbAdapter::new(
                    api_key.clone(),
                    config.tmdb_language.clone(),
                ));
                let cached = Arc::new(CachingSuggestionProvider::new(
                    tmdb,
                    config.suggestion_cache_capacity,
                ));
                Some(Arc::new(SuggestionService::new(cached)))
            }
            None => {
                log::warn!("TMDB_API_KEY not set, search suggestions are disabled");
                None
            }
        };

        Self {
            catalog: Arc::new(ShowCatalogService::new(catalog_repo)),
            ingestion: Arc::new(IngestionService::new(ingestion_backend)),
            suggestions,
            images: Arc::new(ImageUrlCache::default()),
            config,
        }
    }

    /// Suggestions for the search box; a lookup overtaken by a newer term comes
    /// back `Superseded`. `ConfigError` when TMDB is not configured.
    pub async fn fetch_suggestions(&self, term: &str) -> AppResult<SuggestionOutcome> {
        match &self.suggestions {
            Some(service) => service.suggest(term).await,
            None => Err(AppError::ConfigError(
                "TMDB_API_KEY is required for suggestions".to_string(),
            )),
        }
    }

    /// Debounced criteria changes for a stream of raw search-box edits, using
    /// the configured interval
    pub fn search_changes<S>(&self, edits: S) -> impl futures::Stream<Item = CriteriaChange>
    where
        S: futures::Stream<Item = String> + Unpin,
    {
        debounced_search(edits, self.config.search_debounce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suggestions_require_a_key() {
        let app = PacingApp::from_config(AppConfig::default());
        assert!(app.suggestions.is_none());
        let err = app.fetch_suggestions("bluey").await.unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_key_enables_suggestions() {
        let config = AppConfig {
            tmdb_api_key: Some("key".to_string()),
            ..AppConfig::default()
        };
        let app = PacingApp::from_config(config);
        assert!(app.suggestions.is_some());
        assert_eq!(app.config.suggestion_cache_capacity, 100);
    }
}
