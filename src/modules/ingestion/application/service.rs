//! Ingestion triggers.
//!
//! The backend does the crawling and the analysis; this service only validates
//! the request, fires it once, and reports the eventual success value or the
//! failure message. Nothing here retries.

use crate::modules::ingestion::domain::{AnalyzedVideo, IngestionBackend};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_info, log_warn};
use futures::future;
use serde::Serialize;
use std::sync::Arc;

/// Eventual result of a long-running trigger
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum IngestionOutcome<T> {
    Completed(T),
    Failed { message: String },
}

impl<T> IngestionOutcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, IngestionOutcome::Completed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            IngestionOutcome::Completed(value) => Some(value),
            IngestionOutcome::Failed { .. } => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            IngestionOutcome::Completed(_) => None,
            IngestionOutcome::Failed { message } => Some(message),
        }
    }

    fn from_result(result: AppResult<T>, operation: &str) -> Self {
        match result {
            Ok(value) => IngestionOutcome::Completed(value),
            Err(e) => {
                LogContext::error_with_context(&e, operation);
                IngestionOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}

pub struct IngestionService {
    backend: Arc<dyn IngestionBackend>,
}

impl IngestionService {
    pub fn new(backend: Arc<dyn IngestionBackend>) -> Self {
        Self { backend }
    }

    /// Crawl and analyze videos for `term`.
    ///
    /// A blank term is rejected before the backend is contacted. Backend
    /// failures come back as `IngestionOutcome::Failed`.
    pub async fn crawl(&self, term: &str) -> AppResult<IngestionOutcome<Vec<AnalyzedVideo>>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(AppError::ValidationError(
                "Crawl search term cannot be empty".to_string(),
            ));
        }

        log_info!("Starting crawl for '{}'", term);
        let timer = TimedOperation::new("crawl_and_analyze");
        let outcome = IngestionOutcome::from_result(
            self.backend.crawl_and_analyze(term).await,
            &format!("crawl '{}'", term),
        );

        match &outcome {
            IngestionOutcome::Completed(videos) => {
                timer.finish_with_info(&format!("{} videos", videos.len()));
                log_info!("Crawl for '{}' analyzed {} videos", term, videos.len());
            }
            IngestionOutcome::Failed { message } => {
                timer.finish();
                log_warn!("Crawl for '{}' failed: {}", term, message);
            }
        }

        Ok(outcome)
    }

    /// Crawl several terms concurrently; one outcome per term, in input order
    pub async fn crawl_batch(
        &self,
        terms: &[String],
    ) -> Vec<AppResult<IngestionOutcome<Vec<AnalyzedVideo>>>> {
        log_info!("Starting batch crawl of {} terms", terms.len());

        let results = future::join_all(terms.iter().map(|term| self.crawl(term))).await;

        let completed = results
            .iter()
            .filter(|r| matches!(r, Ok(outcome) if outcome.is_completed()))
            .count();
        log_info!(
            "Batch crawl completed: {} succeeded, {} failed",
            completed,
            results.len() - completed
        );

        results
    }

    pub async fn populate(&self) -> IngestionOutcome<String> {
        log_info!("Requesting catalog population");
        let timer = TimedOperation::new("populate_catalog");
        let outcome =
            IngestionOutcome::from_result(self.backend.populate_catalog().await, "populate catalog");
        timer.finish();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::ingestion::domain::MockIngestionBackend;

    #[tokio::test]
    async fn test_blank_term_never_reaches_backend() {
        let mut backend = MockIngestionBackend::new();
        backend.expect_crawl_and_analyze().never();

        let service = IngestionService::new(Arc::new(backend));
        let result = service.crawl("   ").await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_crawl_completes_with_trimmed_term() {
        let mut backend = MockIngestionBackend::new();
        backend
            .expect_crawl_and_analyze()
            .withf(|term| term == "dessin animé bébé")
            .times(1)
            .returning(|_| Ok(vec![AnalyzedVideo::new("yt-1", "Petit Ours Brun", 91.0)]));

        let service = IngestionService::new(Arc::new(backend));
        let outcome = service.crawl("  dessin animé bébé ").await.unwrap();
        assert!(outcome.is_completed());
        assert_eq!(outcome.value().map(|v| v.len()), Some(1));
    }

    #[tokio::test]
    async fn test_failure_is_reported_once() {
        let mut backend = MockIngestionBackend::new();
        backend
            .expect_populate_catalog()
            .times(1)
            .returning(|| Err(AppError::ExternalServiceError("PacingAPI returned error: 502".into())));

        let service = IngestionService::new(Arc::new(backend));
        let outcome = service.populate().await;
        assert_eq!(
            outcome.failure_message(),
            Some("External service error: PacingAPI returned error: 502")
        );
    }

    #[tokio::test]
    async fn test_batch_keeps_input_order() {
        let mut backend = MockIngestionBackend::new();
        backend.expect_crawl_and_analyze().returning(|term| {
            if term == "bad" {
                Err(AppError::ExternalServiceError("boom".into()))
            } else {
                Ok(vec![AnalyzedVideo::new(term, term, 50.0)])
            }
        });

        let service = IngestionService::new(Arc::new(backend));
        let terms = vec!["calm".to_string(), "bad".to_string(), "".to_string()];
        let results = service.crawl_batch(&terms).await;

        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().unwrap().is_completed());
        assert!(!results[1].as_ref().unwrap().is_completed());
        assert!(results[2].is_err());
    }
}
