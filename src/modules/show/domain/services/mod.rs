pub mod catalog_filter;
pub mod catalog_stats;
pub mod classifier;
pub mod request_sequencer;
pub mod search_debouncer;

pub use catalog_filter::{apply_filters, CriteriaChange, FilterCriteria};
pub use catalog_stats::{CatalogStats, TierCount};
pub use classifier::{classify_age, classify_score, AgeTierDescriptor, TierDescriptor};
pub use request_sequencer::{RequestSequencer, RequestTicket};
pub use search_debouncer::{debounced_search, SearchDebouncer};
