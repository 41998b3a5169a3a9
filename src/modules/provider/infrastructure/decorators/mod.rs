pub mod caching_suggestion_provider;

pub use caching_suggestion_provider::{CachingSuggestionProvider, DEFAULT_SUGGESTION_CAPACITY};
