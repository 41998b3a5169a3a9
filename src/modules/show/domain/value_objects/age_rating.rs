use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recommended minimum age bands the catalog knows how to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeRating {
    /// 0+ - toddlers
    AllAges,
    /// 3+
    ThreePlus,
    /// 6+
    SixPlus,
    /// 10+
    TenPlus,
    /// 14+
    FourteenPlus,
}

impl AgeRating {
    pub const ALL: [AgeRating; 5] = [
        AgeRating::AllAges,
        AgeRating::ThreePlus,
        AgeRating::SixPlus,
        AgeRating::TenPlus,
        AgeRating::FourteenPlus,
    ];

    /// Canonical code as stored by the backend
    pub fn code(&self) -> &'static str {
        match self {
            AgeRating::AllAges => "0+",
            AgeRating::ThreePlus => "3+",
            AgeRating::SixPlus => "6+",
            AgeRating::TenPlus => "10+",
            AgeRating::FourteenPlus => "14+",
        }
    }

    pub fn min_age(&self) -> u8 {
        match self {
            AgeRating::AllAges => 0,
            AgeRating::ThreePlus => 3,
            AgeRating::SixPlus => 6,
            AgeRating::TenPlus => 10,
            AgeRating::FourteenPlus => 14,
        }
    }

    pub fn color_token(&self) -> &'static str {
        match self {
            AgeRating::AllAges => "green",
            AgeRating::ThreePlus => "blue",
            AgeRating::SixPlus => "yellow",
            AgeRating::TenPlus => "orange",
            AgeRating::FourteenPlus => "red",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AgeRating::AllAges => "border-green-500 text-green-700",
            AgeRating::ThreePlus => "border-blue-500 text-blue-700",
            AgeRating::SixPlus => "border-yellow-500 text-yellow-700",
            AgeRating::TenPlus => "border-orange-500 text-orange-700",
            AgeRating::FourteenPlus => "border-red-500 text-red-700",
        }
    }

    /// Map a US TV parental guideline (as returned by TMDB content ratings)
    pub fn from_tv_rating(rating: &str) -> Option<Self> {
        match rating.trim().to_uppercase().as_str() {
            "TV-Y" => Some(AgeRating::AllAges),
            "TV-Y7" => Some(AgeRating::ThreePlus),
            "TV-G" => Some(AgeRating::SixPlus),
            "TV-PG" => Some(AgeRating::TenPlus),
            "TV-14" => Some(AgeRating::FourteenPlus),
            _ => None,
        }
    }
}

impl fmt::Display for AgeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for AgeRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AgeRating::ALL
            .into_iter()
            .find(|rating| rating.code() == trimmed)
            .ok_or_else(|| format!("Unknown age rating: {}", s))
    }
}

impl Serialize for AgeRating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for AgeRating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for rating in AgeRating::ALL {
            assert_eq!(rating.code().parse::<AgeRating>(), Ok(rating));
        }
        assert!("7+".parse::<AgeRating>().is_err());
        assert!("".parse::<AgeRating>().is_err());
    }

    #[test]
    fn test_min_age_increases_with_band() {
        let ages: Vec<u8> = AgeRating::ALL.iter().map(|r| r.min_age()).collect();
        assert_eq!(ages, vec![0, 3, 6, 10, 14]);
    }

    #[test]
    fn test_tv_ratings() {
        assert_eq!(AgeRating::from_tv_rating("TV-Y"), Some(AgeRating::AllAges));
        assert_eq!(AgeRating::from_tv_rating("tv-y7"), Some(AgeRating::ThreePlus));
        assert_eq!(AgeRating::from_tv_rating("TV-14"), Some(AgeRating::FourteenPlus));
        assert_eq!(AgeRating::from_tv_rating("TV-MA"), None);
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&AgeRating::TenPlus).unwrap(), "\"10+\"");
        let parsed: AgeRating = serde_json::from_str("\"6+\"").unwrap();
        assert_eq!(parsed, AgeRating::SixPlus);
    }
}
