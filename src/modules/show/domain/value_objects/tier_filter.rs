use super::pacing_tier::PacingTier;
use crate::shared::errors::AppError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Pacing selector of the catalog filter: one tier, or a contiguous run of tiers.
///
/// Matching goes through `PacingTier::from_score`, so every range is
/// inclusive-lower / exclusive-upper on the canonical thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TierFilter {
    Tier { tier: PacingTier },
    Span {
        calmest: PacingTier,
        most_stimulating: PacingTier,
    },
}

/// Scores that sit on a tier boundary. 0 and 100 stand for the open ends.
const BOUNDARIES: [u32; 6] = [0, 30, 50, 70, 90, 100];

fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:(?P<lo>\d{1,3})\s*(?:-|–|\.\.)\s*(?P<hi>\d{1,3})|(?P<min>\d{1,3})\s*\+|<\s*(?P<max>\d{1,3}))$")
            .expect("tier range pattern is valid")
    })
}

impl TierFilter {
    pub fn tier(tier: PacingTier) -> Self {
        TierFilter::Tier { tier }
    }

    /// Tiers between `a` and `b`, in either order
    pub fn span(a: PacingTier, b: PacingTier) -> Self {
        let (calmest, most_stimulating) = if a <= b { (a, b) } else { (b, a) };
        if calmest == most_stimulating {
            TierFilter::Tier { tier: calmest }
        } else {
            TierFilter::Span {
                calmest,
                most_stimulating,
            }
        }
    }

    pub fn contains(&self, tier: PacingTier) -> bool {
        match self {
            TierFilter::Tier { tier: wanted } => *wanted == tier,
            TierFilter::Span {
                calmest,
                most_stimulating,
            } => *calmest <= tier && tier <= *most_stimulating,
        }
    }

    pub fn matches(&self, score: f64) -> bool {
        self.contains(PacingTier::from_score(score))
    }

    /// Tiers selected, calmest first
    pub fn tiers(&self) -> Vec<PacingTier> {
        PacingTier::ALL
            .into_iter()
            .filter(|tier| self.contains(*tier))
            .collect()
    }

    /// Build a filter from a numeric `[lo, hi)` score range. Both ends must be
    /// canonical boundaries.
    pub fn from_score_range(lo: u32, hi: u32) -> Result<Self, AppError> {
        if !BOUNDARIES.contains(&lo) || !BOUNDARIES.contains(&hi) || lo >= hi {
            return Err(AppError::ValidationError(format!(
                "Score range {}-{} does not align with tier boundaries {:?}",
                lo, hi, BOUNDARIES
            )));
        }

        let most_stimulating = PacingTier::from_score(lo as f64);
        // hi is exclusive: the calmest tier is the one just below it
        let calmest = PacingTier::from_score(hi as f64 - 1.0);
        Ok(TierFilter::span(calmest, most_stimulating))
    }
}

impl fmt::Display for TierFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierFilter::Tier { tier } => write!(f, "{}", tier.id()),
            TierFilter::Span {
                calmest,
                most_stimulating,
            } => write!(f, "{}..{}", calmest.id(), most_stimulating.id()),
        }
    }
}

/// Parses a user-facing selector. Accepts tier ids (`calm`), the legacy
/// dashboard presets (`excellent`, `good`, `fast`), and score ranges aligned
/// on the thresholds (`70-90`, `90+`, `<30`).
///
/// `all` has no tier filter and is handled by `parse_optional`.
impl FromStr for TierFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        if let Ok(tier) = normalized.parse::<PacingTier>() {
            return Ok(TierFilter::tier(tier));
        }

        match normalized.as_str() {
            "excellent" | "slow" => return Ok(TierFilter::tier(PacingTier::VeryCalm)),
            "good" => return Ok(TierFilter::tier(PacingTier::Calm)),
            "fast" | "energetic" => {
                return Ok(TierFilter::span(
                    PacingTier::Stimulating,
                    PacingTier::VeryStimulating,
                ))
            }
            _ => {}
        }

        let captures = range_pattern().captures(&normalized).ok_or_else(|| {
            AppError::ValidationError(format!("Unrecognized pacing filter '{}'", s))
        })?;

        let number = |name: &str| -> Result<Option<u32>, AppError> {
            captures
                .name(name)
                .map(|m| m.as_str().parse::<u32>().map_err(AppError::from))
                .transpose()
        };

        match (number("lo")?, number("hi")?, number("min")?, number("max")?) {
            (Some(lo), Some(hi), _, _) => TierFilter::from_score_range(lo, hi),
            (_, _, Some(min), _) => TierFilter::from_score_range(min, 100),
            (_, _, _, Some(max)) => TierFilter::from_score_range(0, max),
            _ => Err(AppError::ValidationError(format!(
                "Unrecognized pacing filter '{}'",
                s
            ))),
        }
    }
}

impl TierFilter {
    /// Like `from_str`, but `all` and the empty string mean "no pacing filter"
    pub fn parse_optional(s: &str) -> Result<Option<Self>, AppError> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(None)
        } else {
            trimmed.parse().map(Some)
        }
    }
}
