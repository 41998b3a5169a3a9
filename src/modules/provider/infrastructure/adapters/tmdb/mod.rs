pub mod adapter;
pub mod mapper;
pub mod models;

pub use adapter::{ImageKind, TmdbAdapter, BACKDROP_PLACEHOLDER, IMAGE_BASE_URL, POSTER_PLACEHOLDER};
pub use mapper::TmdbMapper;
