use crate::log_debug;
use crate::modules::provider::domain::entities::ShowSummary;
use crate::modules::provider::infrastructure::CachingSuggestionProvider;
use crate::modules::show::domain::services::RequestSequencer;
use crate::shared::errors::AppResult;
use std::sync::Arc;

/// What became of a suggestion lookup once its answer arrived
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    /// The lookup was the latest one issued
    Applied(Vec<ShowSummary>),
    /// A newer term was typed meanwhile; the answer was dropped
    Superseded,
}

/// Suggestions for the search box, last-typed term wins.
///
/// Lookups go through the caching provider so a superseded answer still lands
/// in the cache; only the outcome reported to the caller changes.
pub struct SuggestionService {
    provider: Arc<CachingSuggestionProvider>,
    sequencer: RequestSequencer,
}

impl SuggestionService {
    pub fn new(provider: Arc<CachingSuggestionProvider>) -> Self {
        Self {
            provider,
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn provider(&self) -> &Arc<CachingSuggestionProvider> {
        &self.provider
    }

    /// Older lookups (successes and failures alike) resolve to `Superseded`
    pub async fn suggest(&self, term: &str) -> AppResult<SuggestionOutcome> {
        let ticket = self.sequencer.begin();
        let result = self.provider.get_or_fetch(term).await;

        match self.sequencer.resolve(ticket, result) {
            Some(result) => Ok(SuggestionOutcome::Applied(result?)),
            None => {
                log_debug!("Suggestions for '{}' superseded", term);
                Ok(SuggestionOutcome::Superseded)
            }
        }
    }
}
