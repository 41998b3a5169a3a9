pub mod image_url_cache;

pub use image_url_cache::{ImageUrlCache, DEFAULT_IMAGE_CACHE_CAPACITY};
