/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use pacing_lib::modules::{
    ingestion::AnalyzedVideo,
    provider::ShowSummary,
    show::domain::entities::{AnalysisDetails, Show, ShowId},
};
use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

pub struct ShowFactory {
    id: ShowId,
    title: String,
    pacing_score: f64,
    age_recommendation: Option<String>,
    description: Option<String>,
    poster_path: Option<String>,
    average_shot_length: Option<f64>,
    num_scenes: Option<u32>,
    analysis_details: Option<AnalysisDetails>,
}

impl Default for ShowFactory {
    fn default() -> Self {
        Self {
            id: ShowId::Number(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            title: "Test Show".to_string(),
            pacing_score: 50.0,
            age_recommendation: None,
            description: None,
            poster_path: None,
            average_shot_length: None,
            num_scenes: None,
            analysis_details: None,
        }
    }
}

impl ShowFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<ShowId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.pacing_score = score;
        self
    }

    pub fn with_age(mut self, age: &str) -> Self {
        self.age_recommendation = Some(age.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_poster(mut self, path: &str) -> Self {
        self.poster_path = Some(path.to_string());
        self
    }

    pub fn with_editing_metrics(mut self, shot_length: f64, scenes: u32, cuts_per_minute: f64) -> Self {
        self.average_shot_length = Some(shot_length);
        self.num_scenes = Some(scenes);
        self.analysis_details = Some(AnalysisDetails {
            cuts_per_minute: Some(cuts_per_minute),
            flashs_detected: Some(0),
            motion_intensity: None,
        });
        self
    }

    pub fn build(self) -> Show {
        let mut show = Show::new(self.id, self.title, self.pacing_score);
        show.age_recommendation = self.age_recommendation;
        show.description = self.description;
        show.poster_path = self.poster_path;
        show.average_shot_length = self.average_shot_length;
        show.num_scenes = self.num_scenes;
        show.analysis_details = self.analysis_details;
        show
    }

    // Presets

    pub fn cocomelon() -> Show {
        Self::new()
            .with_title("Cocomelon")
            .with_score(22.0)
            .with_age("7+")
            .build()
    }

    pub fn bluey() -> Show {
        Self::new()
            .with_title("Bluey")
            .with_score(65.0)
            .with_age("3-5")
            .build()
    }

    pub fn petit_ours_brun() -> Show {
        Self::new()
            .with_title("Petit Ours Brun")
            .with_score(92.0)
            .with_age("0+")
            .with_editing_metrics(7.8, 41, 7.7)
            .build()
    }

    pub fn paw_patrol() -> Show {
        Self::new()
            .with_title("Paw Patrol")
            .with_score(35.0)
            .with_age("3+")
            .build()
    }

    pub fn sarah_and_duck() -> Show {
        Self::new()
            .with_title("Sarah & Duck")
            .with_score(88.0)
            .with_age("0+")
            .build()
    }
}

/// A mixed catalog touching every tier
pub fn sample_catalog() -> Vec<Show> {
    vec![
        ShowFactory::cocomelon(),
        ShowFactory::bluey(),
        ShowFactory::petit_ours_brun(),
        ShowFactory::paw_patrol(),
        ShowFactory::sarah_and_duck(),
        ShowFactory::new()
            .with_title("Bluey Minisodes")
            .with_score(74.0)
            .with_age("3+")
            .build(),
    ]
}

pub fn summary(id: u32, name: &str) -> ShowSummary {
    ShowSummary::new(id, name)
}

pub fn analyzed_video(id: &str, title: &str, score: f64) -> AnalyzedVideo {
    AnalyzedVideo::new(id, title, score)
}
