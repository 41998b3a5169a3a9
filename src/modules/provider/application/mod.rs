pub mod suggestion_service;

pub use suggestion_service::{SuggestionOutcome, SuggestionService};
