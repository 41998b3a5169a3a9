use crate::modules::show::domain::{entities::Show, value_objects::PacingTier};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCount {
    pub tier: PacingTier,
    pub count: usize,
}

/// Summary figures for the dashboard header
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    /// 0 for an empty catalog
    pub average_score: f64,
    /// 0 for an empty catalog
    pub best_score: f64,
    /// One entry per tier, calmest first, zero counts included
    pub tiers: Vec<TierCount>,
}

impl CatalogStats {
    pub fn compute(shows: &[Show]) -> Self {
        let mut tiers: Vec<TierCount> = PacingTier::ALL
            .into_iter()
            .map(|tier| TierCount { tier, count: 0 })
            .collect();

        // NaN scores are counted in their tier but kept out of the averages
        let mut scored = 0usize;
        let mut sum = 0.0;
        let mut best: Option<f64> = None;

        for show in shows {
            let tier = show.tier();
            if let Some(entry) = tiers.iter_mut().find(|entry| entry.tier == tier) {
                entry.count += 1;
            }
            if show.pacing_score.is_finite() {
                scored += 1;
                sum += show.pacing_score;
                best = Some(best.map_or(show.pacing_score, |b: f64| b.max(show.pacing_score)));
            }
        }

        Self {
            total: shows.len(),
            average_score: if scored == 0 { 0.0 } else { sum / scored as f64 },
            best_score: best.unwrap_or(0.0),
            tiers,
        }
    }

    pub fn count_for(&self, tier: PacingTier) -> usize {
        self.tiers
            .iter()
            .find(|entry| entry.tier == tier)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}
