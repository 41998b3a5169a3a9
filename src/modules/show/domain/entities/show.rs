use crate::modules::show::domain::value_objects::{AgeRating, PacingTier};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier; the backend hands out integers, imported rows may carry strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShowId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowId::Number(n) => write!(f, "{}", n),
            ShowId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ShowId {
    fn from(id: i64) -> Self {
        ShowId::Number(id)
    }
}

impl From<i32> for ShowId {
    fn from(id: i32) -> Self {
        ShowId::Number(id.into())
    }
}

impl From<&str> for ShowId {
    fn from(id: &str) -> Self {
        ShowId::Text(id.to_string())
    }
}

/// Editing metrics reported by the video analyzer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDetails {
    pub cuts_per_minute: Option<f64>,
    pub flashs_detected: Option<u32>,
    pub motion_intensity: Option<f64>,
}

/// A catalog entry. Read-only for the classifier and the filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: ShowId,
    pub title: String,
    /// 0-100, higher is calmer
    pub pacing_score: f64,
    pub age_recommendation: Option<String>,
    pub description: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub average_shot_length: Option<f64>,
    pub num_scenes: Option<u32>,
    pub analysis_details: Option<AnalysisDetails>,
}

impl Show {
    pub fn new(id: impl Into<ShowId>, title: impl Into<String>, pacing_score: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            pacing_score,
            age_recommendation: None,
            description: None,
            poster_path: None,
            backdrop_path: None,
            average_shot_length: None,
            num_scenes: None,
            analysis_details: None,
        }
    }

    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age_recommendation = Some(age.into());
        self
    }

    pub fn tier(&self) -> PacingTier {
        PacingTier::from_score(self.pacing_score)
    }

    /// The age band, when the code is one we recognize
    pub fn age_rating(&self) -> Option<AgeRating> {
        self.age_recommendation
            .as_deref()
            .and_then(|code| code.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_id_accepts_numbers_and_strings() {
        let numeric: ShowId = serde_json::from_str("42").unwrap();
        assert_eq!(numeric, ShowId::Number(42));
        let text: ShowId = serde_json::from_str("\"tt-42\"").unwrap();
        assert_eq!(text, ShowId::Text("tt-42".to_string()));
        assert_eq!(text.to_string(), "tt-42");
    }

    #[test]
    fn test_derived_values() {
        let show = Show::new(1, "Bluey", 65.0).with_age("3+");
        assert_eq!(show.tier(), PacingTier::Moderate);
        assert_eq!(show.age_rating(), Some(AgeRating::ThreePlus));

        let unknown_age = Show::new(2, "Cocomelon", 22.0).with_age("7+");
        assert_eq!(unknown_age.age_rating(), None);
    }
}
