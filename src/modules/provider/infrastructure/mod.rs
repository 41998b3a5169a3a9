pub mod adapters;
pub mod cache;
pub mod decorators;

// Re-export commonly used types
pub use adapters::{ImageKind, TmdbAdapter};
pub use cache::ImageUrlCache;
pub use decorators::CachingSuggestionProvider;
