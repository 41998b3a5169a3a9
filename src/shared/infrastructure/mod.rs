/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// multiple bounded contexts (modules).
pub mod http_client;

// Re-exports for convenience
pub use http_client::{RateLimitClient, RetryPolicy};
