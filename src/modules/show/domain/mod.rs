pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::*;
pub use repositories::ShowCatalogRepository;
pub use services::{
    apply_filters, classify_age, classify_score, CatalogStats, CriteriaChange, FilterCriteria,
};
pub use value_objects::{AgeFilter, AgeRating, PacingTier, TierFilter};
