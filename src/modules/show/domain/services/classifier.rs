//! Score and age classification for display.
//!
//! Both functions are total: any input resolves to a descriptor.

use crate::modules::show::domain::value_objects::{AgeRating, PacingTier};
use serde::Serialize;

/// Everything a view needs to render a pacing score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDescriptor {
    pub tier: PacingTier,
    pub label: &'static str,
    pub color_token: &'static str,
    pub css_class: &'static str,
    pub hex_color: &'static str,
    pub short_description: &'static str,
}

impl From<PacingTier> for TierDescriptor {
    fn from(tier: PacingTier) -> Self {
        Self {
            tier,
            label: tier.label(),
            color_token: tier.color_token(),
            css_class: tier.css_class(),
            hex_color: tier.hex_color(),
            short_description: tier.short_description(),
        }
    }
}

/// Everything a view needs to render an age badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeTierDescriptor {
    /// `None` for unrecognized codes
    pub rating: Option<AgeRating>,
    pub label: &'static str,
    pub color_token: &'static str,
    pub css_class: &'static str,
}

impl AgeTierDescriptor {
    pub fn unknown() -> Self {
        Self {
            rating: None,
            label: "?",
            color_token: "gray",
            css_class: "border-gray-500 text-gray-700",
        }
    }

    pub fn is_known(&self) -> bool {
        self.rating.is_some()
    }
}

impl From<AgeRating> for AgeTierDescriptor {
    fn from(rating: AgeRating) -> Self {
        Self {
            rating: Some(rating),
            label: rating.code(),
            color_token: rating.color_token(),
            css_class: rating.css_class(),
        }
    }
}

pub fn classify_score(score: f64) -> TierDescriptor {
    PacingTier::from_score(score).into()
}

/// Unrecognized or empty codes get the neutral gray descriptor
pub fn classify_age(age_code: &str) -> AgeTierDescriptor {
    age_code
        .parse::<AgeRating>()
        .map(AgeTierDescriptor::from)
        .unwrap_or_else(|_| AgeTierDescriptor::unknown())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_exact() {
        let cases = [
            (90.0, PacingTier::VeryCalm),
            (89.0, PacingTier::Calm),
            (70.0, PacingTier::Calm),
            (69.0, PacingTier::Moderate),
            (50.0, PacingTier::Moderate),
            (49.0, PacingTier::Stimulating),
            (30.0, PacingTier::Stimulating),
            (29.0, PacingTier::VeryStimulating),
        ];
        for (score, expected) in cases {
            assert_eq!(classify_score(score).tier, expected, "score {}", score);
        }
    }

    #[test]
    fn test_fractional_scores_just_below_a_boundary() {
        assert_eq!(classify_score(89.999).tier, PacingTier::Calm);
        assert_eq!(classify_score(29.5).tier, PacingTier::VeryStimulating);
    }

    #[test]
    fn test_out_of_domain_scores_lean_to_extremes() {
        assert_eq!(classify_score(100.0).tier, PacingTier::VeryCalm);
        assert_eq!(classify_score(250.0).tier, PacingTier::VeryCalm);
        assert_eq!(classify_score(0.0).tier, PacingTier::VeryStimulating);
        assert_eq!(classify_score(-12.0).tier, PacingTier::VeryStimulating);
        assert_eq!(classify_score(f64::NAN).tier, PacingTier::VeryStimulating);
        assert_eq!(classify_score(f64::INFINITY).tier, PacingTier::VeryCalm);
    }

    #[test]
    fn test_descriptor_fields() {
        let descriptor = classify_score(95.0);
        assert_eq!(descriptor.label, "Très calme / Excellent");
        assert_eq!(descriptor.color_token, "green");
        assert_eq!(descriptor.css_class, "bg-green-500");
        assert_eq!(
            descriptor.short_description,
            "Très calme - Parfait pour les tout-petits"
        );

        assert_eq!(classify_score(10.0).label, "Très stimulant / Rapide");
    }

    #[test]
    fn test_monotone_over_the_domain() {
        let mut previous = classify_score(100.0).tier;
        for score in (0..=100).rev() {
            let tier = classify_score(score as f64).tier;
            assert!(tier >= previous, "score {} went calmer", score);
            previous = tier;
        }
    }

    #[test]
    fn test_classify_age() {
        let descriptor = classify_age("3+");
        assert_eq!(descriptor.rating, Some(AgeRating::ThreePlus));
        assert_eq!(descriptor.color_token, "blue");

        assert_eq!(classify_age("14+").color_token, "red");
        assert_eq!(classify_age(""), AgeTierDescriptor::unknown());
        assert_eq!(classify_age("3-5"), AgeTierDescriptor::unknown());
        assert!(!classify_age("18+").is_known());
    }
}
