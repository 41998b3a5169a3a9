pub mod show_catalog_repo;

pub use show_catalog_repo::ShowCatalogRepository;
#[cfg(test)]
pub use show_catalog_repo::MockShowCatalogRepository;
