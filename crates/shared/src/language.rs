use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Languages with a full translation catalog.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
    Es,
    It,
    Pt,
    Nl,
    Pl,
    Ro,
    Cs,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Nl => "nl",
            Language::Pl => "pl",
            Language::Ro => "ro",
            Language::Cs => "cs",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str("de").unwrap(), Language::De);
        assert_eq!(Language::from_str("CS").unwrap(), Language::Cs);
        assert!(Language::from_str("de-DE").is_err());
        assert!(Language::from_str("ja").is_err());
    }

    #[test]
    fn test_code_matches_display() {
        for language in Language::VARIANTS {
            assert_eq!(language.code(), language.to_string());
            assert_eq!(language.code(), language.as_ref());
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Language::Pt).unwrap();
        assert_eq!(json, "\"pt\"");

        let language: Language = serde_json::from_str("\"nl\"").unwrap();
        assert_eq!(language, Language::Nl);
    }
}
