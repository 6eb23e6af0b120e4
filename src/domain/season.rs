// Season domain model - the fixed temporal facets of the dataset
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Annual,
    Winter,
    Spring,
    Summer,
    Autumn,
}

#[derive(Debug, Error)]
#[error("unknown season: {0}")]
pub struct UnknownSeason(String);

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Annual,
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Autumn,
    ];

    /// The lowercase tag used in the backend `period` column and REST filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Annual => "annual",
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = UnknownSeason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" => Ok(Season::Annual),
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" => Ok(Season::Autumn),
            _ => Err(UnknownSeason(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Summer".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!(" ANNUAL ".parse::<Season>().unwrap(), Season::Annual);
    }

    #[test]
    fn test_parse_rejects_unknown_tags() {
        assert!("monsoon".parse::<Season>().is_err());
        assert!("".parse::<Season>().is_err());
    }

    #[test]
    fn test_display_matches_backend_tag() {
        assert_eq!(Season::Winter.to_string(), "winter");
    }
}
