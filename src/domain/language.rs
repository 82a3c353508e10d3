use crate::error::UssdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages a subscriber can choose from the language menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "sw")]
    Kiswahili,
    #[serde(rename = "so")]
    Somali,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Kiswahili, Language::Somali];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Kiswahili => "sw",
            Language::Somali => "so",
        }
    }

    /// Maps a language-menu choice to a language. The menu order is fixed.
    pub fn from_selection(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Language::Kiswahili),
            "2" => Some(Language::English),
            "3" => Some(Language::Somali),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UssdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UssdError::ConfigError(format!("unsupported language code '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_table() {
        assert_eq!(Language::from_selection("1"), Some(Language::Kiswahili));
        assert_eq!(Language::from_selection("2"), Some(Language::English));
        assert_eq!(Language::from_selection("3"), Some(Language::Somali));
        assert_eq!(Language::from_selection("4"), None);
        assert_eq!(Language::from_selection(""), None);
        assert_eq!(Language::from_selection("01"), None);
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("sw".parse::<Language>().unwrap(), Language::Kiswahili);
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::English);
        assert!(matches!(
            "fr".parse::<Language>(),
            Err(UssdError::ConfigError(_))
        ));
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Somali).unwrap();
        assert_eq!(json, "\"so\"");
        let lang: Language = serde_json::from_str("\"sw\"").unwrap();
        assert_eq!(lang, Language::Kiswahili);
    }
}
