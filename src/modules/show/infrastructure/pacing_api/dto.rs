//! Wire schema of the pacing score backend.
//!
//! Payloads are decoded into these DTOs and validated into domain types here;
//! nothing past this module sees an unvalidated backend row.

use crate::modules::ingestion::domain::AnalyzedVideo;
use crate::modules::show::domain::entities::{AnalysisDetails, Show, ShowId};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisDetailsDto {
    pub cuts_per_minute: Option<f64>,
    pub flashs_detected: Option<f64>,
    pub motion_intensity: Option<f64>,
}

/// A row from `GET /shows`. The backend copies the raw analysis row and adds
/// `composite_score`, so both score fields can be present at once.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowDto {
    pub id: ShowId,
    pub title: Option<String>,
    pub composite_score: Option<f64>,
    pub pacing_score: Option<f64>,
    pub age_recommendation: Option<String>,
    pub age_rating: Option<String>,
    pub description: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub average_shot_length: Option<f64>,
    pub num_scenes: Option<f64>,
    pub analysis_details: Option<AnalysisDetailsDto>,
}

/// Why a row was rejected at the boundary
#[derive(Debug, Clone, PartialEq)]
pub enum RejectedRow {
    BlankTitle(ShowId),
}

impl std::fmt::Display for RejectedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectedRow::BlankTitle(id) => write!(f, "show {} has no title", id),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

fn to_count(value: f64) -> Option<u32> {
    value
        .is_finite()
        .then(|| value.max(0.0).round().min(u32::MAX as f64) as u32)
}

impl ShowDto {
    pub fn into_show(self) -> Result<Show, RejectedRow> {
        let title = match non_blank(self.title) {
            Some(title) => title,
            None => return Err(RejectedRow::BlankTitle(self.id)),
        };

        let score = self
            .composite_score
            .or(self.pacing_score)
            .map(clamp_score)
            .unwrap_or(0.0);

        Ok(Show {
            id: self.id,
            title,
            pacing_score: score,
            age_recommendation: non_blank(self.age_recommendation).or(non_blank(self.age_rating)),
            description: non_blank(self.description),
            poster_path: non_blank(self.poster_path),
            backdrop_path: non_blank(self.backdrop_path),
            average_shot_length: self.average_shot_length.filter(|v| v.is_finite()),
            num_scenes: self.num_scenes.and_then(to_count),
            analysis_details: self.analysis_details.map(|d| AnalysisDetails {
                cuts_per_minute: d.cuts_per_minute,
                flashs_detected: d.flashs_detected.and_then(to_count),
                motion_intensity: d.motion_intensity,
            }),
        })
    }
}

/// Validate a whole listing, dropping (and logging) rows that fail
pub fn into_shows(rows: Vec<ShowDto>) -> Vec<Show> {
    let total = rows.len();
    let shows: Vec<Show> = rows
        .into_iter()
        .filter_map(|row| match row.into_show() {
            Ok(show) => Some(show),
            Err(rejected) => {
                log::warn!("Skipping backend row: {}", rejected);
                None
            }
        })
        .collect();

    if shows.len() < total {
        log::warn!("Dropped {} of {} backend rows", total - shows.len(), total);
    }
    shows
}

/// Element of the `POST /analysis/crawl` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedVideoDto {
    pub video_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub pacing_score: Option<f64>,
    pub age_rating: Option<String>,
}

impl AnalyzedVideoDto {
    pub fn into_video(self) -> Option<AnalyzedVideo> {
        let video_id = non_blank(self.video_id)?;
        Some(AnalyzedVideo {
            title: non_blank(self.title).unwrap_or_else(|| video_id.clone()),
            video_id,
            description: non_blank(self.description),
            thumbnail_url: non_blank(self.thumbnail_url),
            video_url: non_blank(self.video_url),
            pacing_score: self.pacing_score.map(clamp_score).unwrap_or(0.0),
            age_rating: non_blank(self.age_rating),
        })
    }
}
