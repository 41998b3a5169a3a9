use crate::modules::show::domain::{
    entities::Show,
    value_objects::{AgeFilter, TierFilter},
};
use crate::shared::utils::logger::LogContext;
use serde::{Deserialize, Serialize};

/// Active filter selection, rebuilt on each user interaction
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search_term: String,
    pub tier_filter: Option<TierFilter>,
    pub age_filter: AgeFilter,
}

/// One user edit to the criteria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CriteriaChange {
    SearchTerm(String),
    Tier(Option<TierFilter>),
    Age(AgeFilter),
    Reset,
}

impl FilterCriteria {
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_tier(mut self, tier_filter: TierFilter) -> Self {
        self.tier_filter = Some(tier_filter);
        self
    }

    pub fn with_age(mut self, age_filter: AgeFilter) -> Self {
        self.age_filter = age_filter;
        self
    }

    pub fn apply(&mut self, change: CriteriaChange) {
        match change {
            CriteriaChange::SearchTerm(term) => self.search_term = term,
            CriteriaChange::Tier(tier_filter) => self.tier_filter = tier_filter,
            CriteriaChange::Age(age_filter) => self.age_filter = age_filter,
            CriteriaChange::Reset => *self = FilterCriteria::default(),
        }
    }

    /// True when no axis restricts the catalog
    pub fn is_unrestricted(&self) -> bool {
        self.search_term.trim().is_empty() && self.tier_filter.is_none() && self.age_filter.is_all()
    }

    pub fn matches(&self, show: &Show) -> bool {
        self.matcher().matches(show)
    }

    fn matcher(&self) -> Matcher<'_> {
        let term = self.search_term.trim();
        Matcher {
            needle: (!term.is_empty()).then(|| term.to_lowercase()),
            tier_filter: self.tier_filter.as_ref(),
            age_filter: &self.age_filter,
        }
    }

    fn describe(&self) -> String {
        format!(
            "term='{}', tier={}, age={}",
            self.search_term.trim(),
            self.tier_filter
                .map(|t| t.to_string())
                .unwrap_or_else(|| "all".to_string()),
            self.age_filter
        )
    }
}

/// Criteria with the search term lowered once per pass
struct Matcher<'a> {
    needle: Option<String>,
    tier_filter: Option<&'a TierFilter>,
    age_filter: &'a AgeFilter,
}

impl Matcher<'_> {
    fn matches(&self, show: &Show) -> bool {
        let title_ok = match &self.needle {
            Some(needle) => show.title.to_lowercase().contains(needle.as_str()),
            None => true,
        };

        title_ok
            && self
                .tier_filter
                .map_or(true, |filter| filter.matches(show.pacing_score))
            && self
                .age_filter
                .matches(show.age_recommendation.as_deref())
    }
}

/// Shows matching every active axis, in input order
pub fn apply_filters(shows: &[Show], criteria: &FilterCriteria) -> Vec<Show> {
    let matcher = criteria.matcher();
    let filtered: Vec<Show> = shows
        .iter()
        .filter(|show| matcher.matches(show))
        .cloned()
        .collect();

    LogContext::filter_operation(shows.len(), filtered.len(), &criteria.describe());
    filtered
}
