pub mod application;
pub mod domain;

pub use application::{IngestionOutcome, IngestionService};
pub use domain::{AnalyzedVideo, IngestionBackend};
