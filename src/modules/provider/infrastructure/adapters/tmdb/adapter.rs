use crate::{
    modules::provider::{
        domain::{
            entities::{ShowDetails, ShowSummary},
            repositories::SuggestionProvider,
        },
        infrastructure::adapters::tmdb::mapper::TmdbMapper,
    },
    shared::{
        errors::{AppError, AppResult},
        infrastructure::http_client::RateLimitClient,
        utils::logger::LogContext,
    },
};
use async_trait::async_trait;

use super::models::*;

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const POSTER_PLACEHOLDER: &str = "/assets/images/no-poster.svg";
pub const BACKDROP_PLACEHOLDER: &str = "/assets/images/no-backdrop.svg";

/// TMDB genre id for animation; suggestions are restricted to it
const ANIMATION_GENRE_ID: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Poster,
    Backdrop,
}

impl ImageKind {
    pub fn default_size(&self) -> &'static str {
        match self {
            ImageKind::Poster => "w342",
            ImageKind::Backdrop => "w780",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ImageKind::Poster => POSTER_PLACEHOLDER,
            ImageKind::Backdrop => BACKDROP_PLACEHOLDER,
        }
    }
}

/// TMDB (The Movie Database) adapter: animated TV search and image URLs
pub struct TmdbAdapter {
    http_client: RateLimitClient,
    base_url: String,
    api_key: String,
    language: String,
    mapper: TmdbMapper,
}

impl TmdbAdapter {
    pub fn new(api_key: String, language: String) -> Self {
        Self::with_client(RateLimitClient::for_tmdb(), api_key, language)
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: RateLimitClient, api_key: String, language: String) -> Self {
        Self {
            http_client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            language,
            mapper: TmdbMapper::new(),
        }
    }

    /// Point the adapter at another host (local stub server in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Build URL with API key and additional query parameters
    fn build_url_with_params(&self, endpoint: &str, params: &[(String, String)]) -> String {
        let mut url = format!("{}{}?api_key={}", self.base_url, endpoint, self.api_key);
        for (key, value) in params {
            if key != "api_key" {
                url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
            }
        }
        url
    }

    /// Animated TV shows matching `query`, in TMDB relevance order
    pub async fn search_tv(&self, query: &str) -> AppResult<Vec<ShowSummary>> {
        let params = vec![
            ("query".to_string(), query.to_string()),
            ("with_genres".to_string(), ANIMATION_GENRE_ID.to_string()),
            ("language".to_string(), self.language.clone()),
        ];
        let url = self.build_url_with_params("/search/tv", &params);

        LogContext::search_operation(query, Some("TMDB"), None);
        let response: TmdbSearchResponse = self.http_client.get(&url).await?;
        let shows = self.mapper.map_to_summaries(response.results);
        LogContext::search_operation(query, Some("TMDB"), Some(shows.len()));

        Ok(shows)
    }

    /// Single show with its content ratings; `None` if TMDB does not know the id
    pub async fn get_show_details(&self, id: u32) -> AppResult<Option<ShowDetails>> {
        let params = vec![
            ("language".to_string(), self.language.clone()),
            (
                "append_to_response".to_string(),
                "content_ratings".to_string(),
            ),
        ];
        let url = self.build_url_with_params(&format!("/tv/{}", id), &params);

        let details: TvShowDetails = match self.http_client.get(&url).await {
            Ok(details) => details,
            Err(AppError::NotFound(_)) => {
                log::info!("TMDB: No TV show found for ID '{}'", id);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        Ok(self.mapper.map_details(details))
    }

    // =============================================================================
    // IMAGE URLS
    // =============================================================================

    /// Absolute image URL, or the placeholder for a missing path
    pub fn build_image_url(path: Option<&str>, size: &str, kind: ImageKind) -> String {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) if path.starts_with("http://") || path.starts_with("https://") => {
                path.to_string()
            }
            Some(path) => {
                let separator = if path.starts_with('/') { "" } else { "/" };
                format!("{}/{}{}{}", IMAGE_BASE_URL, size, separator, path)
            }
            None => kind.placeholder().to_string(),
        }
    }

    pub fn poster_url(path: Option<&str>) -> String {
        Self::build_image_url(path, ImageKind::Poster.default_size(), ImageKind::Poster)
    }

    pub fn backdrop_url(path: Option<&str>) -> String {
        Self::build_image_url(path, ImageKind::Backdrop.default_size(), ImageKind::Backdrop)
    }
}

#[async_trait]
impl SuggestionProvider for TmdbAdapter {
    async fn fetch_suggestions(&self, term: &str) -> AppResult<Vec<ShowSummary>> {
        self.search_tv(term).await
    }
}
