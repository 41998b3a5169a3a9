pub mod entities;
pub mod repository;

pub use entities::AnalyzedVideo;
pub use repository::IngestionBackend;
#[cfg(test)]
pub use repository::MockIngestionBackend;
