use crate::modules::provider::infrastructure::adapters::tmdb::{ImageKind, TmdbAdapter};
use crate::shared::utils::{bounded_cache::BoundedFifoCache, FifoCacheStats};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 500;

/// Remembers how each image URL resolved.
///
/// A URL that failed to load is answered with the placeholder for its kind from
/// then on; a URL that loaded is answered as itself. Bounded FIFO, one instance
/// per owner rather than a process-wide map.
#[derive(Debug)]
pub struct ImageUrlCache {
    resolved: Mutex<BoundedFifoCache<String, String>>,
}

impl Default for ImageUrlCache {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_CAPACITY)
    }
}

impl ImageUrlCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            resolved: Mutex::new(BoundedFifoCache::new(capacity)),
        }
    }

    fn store(&self) -> MutexGuard<'_, BoundedFifoCache<String, String>> {
        // entries are plain strings, a poisoned lock still holds valid data
        self.resolved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// URL to display for an image path
    pub fn image_url(&self, path: Option<&str>, kind: ImageKind) -> String {
        let url = TmdbAdapter::build_image_url(path, kind.default_size(), kind);
        if url == kind.placeholder() {
            return url;
        }
        self.store().get(&url).unwrap_or(url)
    }

    pub fn mark_loaded(&self, url: &str) {
        debug!("Image loaded: {}", url);
        self.store().insert(url.to_string(), url.to_string());
    }

    pub fn mark_failed(&self, url: &str, kind: ImageKind) {
        debug!("Image failed, using placeholder: {}", url);
        self.store()
            .insert(url.to_string(), kind.placeholder().to_string());
    }

    pub fn len(&self) -> usize {
        self.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    pub fn clear(&self) {
        self.store().clear();
    }

    pub fn stats(&self) -> FifoCacheStats {
        self.store().stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::provider::infrastructure::adapters::tmdb::{
        BACKDROP_PLACEHOLDER, POSTER_PLACEHOLDER,
    };

    #[test]
    fn test_unknown_urls_pass_through() {
        let cache = ImageUrlCache::new(4);
        assert_eq!(
            cache.image_url(Some("/a.jpg"), ImageKind::Poster),
            "https://image.tmdb.org/t/p/w342/a.jpg"
        );
        assert_eq!(cache.image_url(None, ImageKind::Backdrop), BACKDROP_PLACEHOLDER);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_failed_url_resolves_to_placeholder() {
        let cache = ImageUrlCache::new(4);
        let url = cache.image_url(Some("/broken.jpg"), ImageKind::Poster);
        cache.mark_failed(&url, ImageKind::Poster);

        assert_eq!(
            cache.image_url(Some("/broken.jpg"), ImageKind::Poster),
            POSTER_PLACEHOLDER
        );
        // the backdrop variant is a different URL
        assert_ne!(
            cache.image_url(Some("/broken.jpg"), ImageKind::Backdrop),
            BACKDROP_PLACEHOLDER
        );
    }

    #[test]
    fn test_bounded() {
        let cache = ImageUrlCache::new(2);
        cache.mark_loaded("a");
        cache.mark_loaded("b");
        cache.mark_failed("c", ImageKind::Poster);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().evictions, 1);
    }
}
