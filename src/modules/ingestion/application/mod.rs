pub mod service;

pub use service::{IngestionOutcome, IngestionService};
