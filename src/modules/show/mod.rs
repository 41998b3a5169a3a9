pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{SearchOutcome, ShowCatalogService};
pub use domain::{
    apply_filters, classify_age, classify_score, FilterCriteria, PacingTier, Show, ShowId,
};
pub use infrastructure::PacingApiClient;
