pub mod service;

pub use service::{SearchOutcome, ShowCatalogService};
