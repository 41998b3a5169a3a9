pub mod client;
pub mod dto;

pub use client::PacingApiClient;
pub use dto::{AnalyzedVideoDto, ShowDto};
