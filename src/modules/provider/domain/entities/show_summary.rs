use crate::modules::show::domain::value_objects::AgeRating;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lightweight metadata record used for search-box suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowSummary {
    pub id: u32,
    pub name: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// `YYYY-MM-DD` as sent by TMDB
    pub first_air_date: Option<String>,
    pub overview: Option<String>,
    pub genre_ids: Vec<u32>,
}

impl ShowSummary {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            poster_path: None,
            backdrop_path: None,
            first_air_date: None,
            overview: None,
            genre_ids: Vec::new(),
        }
    }

    pub fn first_air_year(&self) -> Option<i32> {
        let date = self.first_air_date.as_deref()?.trim();
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|d| d.year())
            .ok()
            .or_else(|| date.get(..4).and_then(|year| year.parse().ok()))
    }
}

/// Full record for a single show, with its US content rating mapped to an age band
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowDetails {
    pub summary: ShowSummary,
    pub genres: Vec<String>,
    pub number_of_seasons: Option<u32>,
    pub age_rating: Option<AgeRating>,
}
