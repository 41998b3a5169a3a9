pub mod show_summary;

pub use show_summary::{ShowDetails, ShowSummary};
