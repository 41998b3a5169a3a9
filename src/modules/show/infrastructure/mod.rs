pub mod pacing_api;

pub use pacing_api::PacingApiClient;
