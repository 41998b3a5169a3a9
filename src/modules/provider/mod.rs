pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{SuggestionOutcome, SuggestionService};
pub use domain::{ShowDetails, ShowSummary, SuggestionProvider};
pub use infrastructure::{CachingSuggestionProvider, ImageKind, ImageUrlCache, TmdbAdapter};
