pub mod tmdb;

pub use tmdb::{ImageKind, TmdbAdapter};
