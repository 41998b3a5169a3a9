use crate::shared::errors::{AppError, AppResult};
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_TMDB_LANGUAGE: &str = "fr-FR";
const DEFAULT_DEBOUNCE_MS: u64 = 300;
const DEFAULT_SUGGESTION_CACHE_CAPACITY: usize = 100;

const DEBOUNCE_RANGE_MS: std::ops::RangeInclusive<u64> = 50..=2000;

/// Runtime configuration, read from the environment (and `.env` via dotenvy)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the pacing score REST backend, without trailing slash
    pub api_base_url: String,
    /// TMDB key; suggestions are unavailable without it
    pub tmdb_api_key: Option<String>,
    pub tmdb_language: String,
    pub search_debounce: Duration,
    pub suggestion_cache_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            tmdb_api_key: None,
            tmdb_language: DEFAULT_TMDB_LANGUAGE.to_string(),
            search_debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            suggestion_cache_capacity: DEFAULT_SUGGESTION_CACHE_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_base_url = get("PACING_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(AppError::ConfigError(format!(
                "PACING_API_URL must be an http(s) URL, got '{}'",
                api_base_url
            )));
        }

        let search_debounce_ms = match get("SEARCH_DEBOUNCE_MS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::ConfigError(format!("SEARCH_DEBOUNCE_MS '{}': {}", raw, e))
            })?,
            None => DEFAULT_DEBOUNCE_MS,
        };

        if !DEBOUNCE_RANGE_MS.contains(&search_debounce_ms) {
            return Err(AppError::ConfigError(format!(
                "SEARCH_DEBOUNCE_MS must be within {}..={}ms, got {}",
                DEBOUNCE_RANGE_MS.start(),
                DEBOUNCE_RANGE_MS.end(),
                search_debounce_ms
            )));
        }

        let suggestion_cache_capacity = match get("SUGGESTION_CACHE_CAPACITY") {
            Some(raw) => raw.parse::<usize>().map_err(|e| {
                AppError::ConfigError(format!("SUGGESTION_CACHE_CAPACITY '{}': {}", raw, e))
            })?,
            None => DEFAULT_SUGGESTION_CACHE_CAPACITY,
        };

        if suggestion_cache_capacity == 0 {
            return Err(AppError::ConfigError(
                "SUGGESTION_CACHE_CAPACITY must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            api_base_url,
            tmdb_api_key: get("TMDB_API_KEY"),
            tmdb_language: get("TMDB_LANGUAGE").unwrap_or_else(|| DEFAULT_TMDB_LANGUAGE.to_string()),
            search_debounce: Duration::from_millis(search_debounce_ms),
            suggestion_cache_capacity,
        })
    }
}
