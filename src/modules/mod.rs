pub mod ingestion;
pub mod provider;
pub mod show;
