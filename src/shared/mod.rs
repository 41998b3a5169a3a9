// Shared kernel: cross-module errors, configuration, HTTP plumbing and utilities

pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (HTTP client)
pub mod utils; // Shared utilities

pub use config::AppConfig;
pub use errors::{AppError, AppResult};
