use crate::shared::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age selector of the catalog filter. `Only` compares the raw code exactly,
/// so codes outside the known bands ("3-5", "7+") still filter correctly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "code", rename_all = "snake_case")]
pub enum AgeFilter {
    #[default]
    All,
    Only(String),
}

impl AgeFilter {
    pub fn only(code: impl Into<String>) -> Self {
        AgeFilter::Only(code.into())
    }

    pub fn matches(&self, age_recommendation: Option<&str>) -> bool {
        match self {
            AgeFilter::All => true,
            AgeFilter::Only(code) => age_recommendation == Some(code.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, AgeFilter::All)
    }
}

impl fmt::Display for AgeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeFilter::All => write!(f, "all"),
            AgeFilter::Only(code) => write!(f, "{}", code),
        }
    }
}

impl FromStr for AgeFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(AgeFilter::All);
        }
        if trimmed.is_empty() {
            return Err(AppError::ValidationError(
                "Age filter cannot be empty; use \"all\"".to_string(),
            ));
        }
        if trimmed.chars().count() > 16 {
            return Err(AppError::ValidationError(format!(
                "Age filter '{}' is too long",
                trimmed
            )));
        }
        Ok(AgeFilter::Only(trimmed.to_string()))
    }
}
