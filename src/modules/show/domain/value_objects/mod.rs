pub mod age_filter;
pub mod age_rating;
pub mod pacing_tier;
pub mod tier_filter;

pub use age_filter::AgeFilter;
pub use age_rating::AgeRating;
pub use pacing_tier::PacingTier;
pub use tier_filter::TierFilter;
