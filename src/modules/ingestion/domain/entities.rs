use serde::{Deserialize, Serialize};

/// One video the backend crawled and scored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedVideo {
    pub video_id: String,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub pacing_score: f64,
    pub age_rating: Option<String>,
}

impl AnalyzedVideo {
    pub fn new(video_id: impl Into<String>, title: impl Into<String>, pacing_score: f64) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            description: None,
            thumbnail_url: None,
            video_url: None,
            pacing_score,
            age_rating: None,
        }
    }
}
