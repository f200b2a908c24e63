use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// UI language of the registry responses. Only affects column headers and
/// labels in the search results, never the query semantics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Swedish,
    English,
}

impl Language {
    /// The locale path segment the registry routes on.
    pub fn locale(&self) -> &'static str {
        match self {
            Language::Swedish => "sv-SE",
            Language::English => "en-GB",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown language {0:?} (expected \"sv\" or \"en\")")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sv" | "sv-se" | "swedish" => Ok(Language::Swedish),
            "en" | "en-gb" | "english" => Ok(Language::English),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("sv".parse::<Language>().unwrap(), Language::Swedish);
        assert_eq!("en-GB".parse::<Language>().unwrap(), Language::English);
        assert!("de".parse::<Language>().is_err());
    }
}
