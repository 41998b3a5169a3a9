use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display bucket derived from a pacing score. Declared calmest first, so the
/// derived ordering reads "calmer < more stimulating".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PacingTier {
    VeryCalm,
    Calm,
    Moderate,
    Stimulating,
    VeryStimulating,
}

/// Lower thresholds, highest first. The first satisfied entry wins; anything
/// below the last one is `VeryStimulating`.
const THRESHOLDS: [(f64, PacingTier); 4] = [
    (90.0, PacingTier::VeryCalm),
    (70.0, PacingTier::Calm),
    (50.0, PacingTier::Moderate),
    (30.0, PacingTier::Stimulating),
];

impl PacingTier {
    pub const ALL: [PacingTier; 5] = [
        PacingTier::VeryCalm,
        PacingTier::Calm,
        PacingTier::Moderate,
        PacingTier::Stimulating,
        PacingTier::VeryStimulating,
    ];

    /// Total over f64: scores above 100 land in `VeryCalm`, negative scores and
    /// NaN in `VeryStimulating`.
    pub fn from_score(score: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, tier)| *tier)
            .unwrap_or(PacingTier::VeryStimulating)
    }

    /// Inclusive lower bound; `None` for the open-ended bottom tier
    pub fn lower_bound(&self) -> Option<f64> {
        THRESHOLDS
            .iter()
            .find(|(_, tier)| tier == self)
            .map(|(threshold, _)| *threshold)
    }

    /// Exclusive upper bound; `None` for the open-ended top tier
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            PacingTier::VeryCalm => None,
            PacingTier::Calm => Some(90.0),
            PacingTier::Moderate => Some(70.0),
            PacingTier::Stimulating => Some(50.0),
            PacingTier::VeryStimulating => Some(30.0),
        }
    }

    /// `[lower, upper)` as a pair of optional bounds
    pub fn score_range(&self) -> (Option<f64>, Option<f64>) {
        (self.lower_bound(), self.upper_bound())
    }

    /// Stable identifier used in filter selectors and serialized output
    pub fn id(&self) -> &'static str {
        match self {
            PacingTier::VeryCalm => "very-calm",
            PacingTier::Calm => "calm",
            PacingTier::Moderate => "moderate",
            PacingTier::Stimulating => "stimulating",
            PacingTier::VeryStimulating => "very-stimulating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PacingTier::VeryCalm => "Très calme / Excellent",
            PacingTier::Calm => "Calme / Bon",
            PacingTier::Moderate => "Modéré",
            PacingTier::Stimulating => "Stimulant",
            PacingTier::VeryStimulating => "Très stimulant / Rapide",
        }
    }

    pub fn short_description(&self) -> &'static str {
        match self {
            PacingTier::VeryCalm => "Très calme - Parfait pour les tout-petits",
            PacingTier::Calm => "Calme - Bon rythme adapté",
            PacingTier::Moderate => "Modéré - À surveiller",
            PacingTier::Stimulating => "Stimulant - Attention au rythme",
            PacingTier::VeryStimulating => "Très stimulant - Peut être trop intense",
        }
    }

    pub fn color_token(&self) -> &'static str {
        match self {
            PacingTier::VeryCalm => "green",
            PacingTier::Calm => "lime",
            PacingTier::Moderate => "yellow",
            PacingTier::Stimulating => "orange",
            PacingTier::VeryStimulating => "red",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PacingTier::VeryCalm => "bg-green-500",
            PacingTier::Calm => "bg-lime-500",
            PacingTier::Moderate => "bg-yellow-500",
            PacingTier::Stimulating => "bg-orange-500",
            PacingTier::VeryStimulating => "bg-red-500",
        }
    }

    pub fn hex_color(&self) -> &'static str {
        match self {
            PacingTier::VeryCalm => "#22c55e",
            PacingTier::Calm => "#84cc16",
            PacingTier::Moderate => "#eab308",
            PacingTier::Stimulating => "#f97316",
            PacingTier::VeryStimulating => "#ef4444",
        }
    }

    /// 1 = calmest
    pub fn level(&self) -> u8 {
        match self {
            PacingTier::VeryCalm => 1,
            PacingTier::Calm => 2,
            PacingTier::Moderate => 3,
            PacingTier::Stimulating => 4,
            PacingTier::VeryStimulating => 5,
        }
    }
}

impl fmt::Display for PacingTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PacingTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        PacingTier::ALL
            .into_iter()
            .find(|tier| tier.id() == normalized)
            .ok_or_else(|| format!("Unknown pacing tier: {}", s))
    }
}
