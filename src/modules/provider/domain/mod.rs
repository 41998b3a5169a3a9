pub mod entities;
pub mod repositories;

pub use entities::{ShowDetails, ShowSummary};
pub use repositories::SuggestionProvider;
