mod suggestion_provider_repo;

pub use suggestion_provider_repo::*;
