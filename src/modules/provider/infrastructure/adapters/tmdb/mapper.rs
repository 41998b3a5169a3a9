use super::models::{TvShow, TvShowDetails};
use crate::modules::provider::domain::entities::{ShowDetails, ShowSummary};
use crate::modules::show::domain::value_objects::AgeRating;

/// Maps TMDB payloads onto provider entities
#[derive(Debug, Clone, Default)]
pub struct TmdbMapper;

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TmdbMapper {
    pub fn new() -> Self {
        Self
    }

    /// `None` when the show has neither a localized nor an original name
    pub fn map_to_summary(&self, show: TvShow) -> Option<ShowSummary> {
        let name = non_blank(show.name).or_else(|| non_blank(show.original_name))?;
        Some(ShowSummary {
            id: show.id,
            name,
            poster_path: non_blank(show.poster_path),
            backdrop_path: non_blank(show.backdrop_path),
            first_air_date: non_blank(show.first_air_date),
            overview: non_blank(show.overview),
            genre_ids: show.genre_ids.unwrap_or_default(),
        })
    }

    pub fn map_to_summaries(&self, shows: Vec<TvShow>) -> Vec<ShowSummary> {
        shows
            .into_iter()
            .filter_map(|show| {
                let id = show.id;
                let summary = self.map_to_summary(show);
                if summary.is_none() {
                    log::debug!("TMDB: Skipping unnamed show {}", id);
                }
                summary
            })
            .collect()
    }

    pub fn map_details(&self, details: TvShowDetails) -> Option<ShowDetails> {
        // US ratings are the ones with a known age mapping
        let age_rating = details.content_ratings.as_ref().and_then(|ratings| {
            ratings
                .results
                .iter()
                .find(|r| r.iso_3166_1 == "US")
                .and_then(|r| AgeRating::from_tv_rating(&r.rating))
        });

        let genres = details.genres.as_ref().map_or_else(Vec::new, |genres| {
            genres.iter().map(|g| g.name.clone()).collect()
        });
        let genre_ids = details
            .genres
            .as_ref()
            .map_or_else(Vec::new, |genres| genres.iter().map(|g| g.id).collect());

        let summary = self.map_to_summary(TvShow {
            id: details.id,
            name: details.name,
            original_name: details.original_name,
            overview: details.overview,
            poster_path: details.poster_path,
            backdrop_path: details.backdrop_path,
            first_air_date: details.first_air_date,
            genre_ids: Some(genre_ids),
        })?;

        Some(ShowDetails {
            summary,
            genres,
            number_of_seasons: details.number_of_seasons,
            age_rating,
        })
    }
}
