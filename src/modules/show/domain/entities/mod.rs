pub mod show;

pub use show::{AnalysisDetails, Show, ShowId};
