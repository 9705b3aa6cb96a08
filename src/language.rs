//! Language pair model for the fixed English/Japanese translation pair.
//!
//! Translation always happens between the two members of the pair: the
//! target of a translation is the opposite of its source.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, TranslationApiError};

/// One of the two supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ja,
}

impl Language {
    /// ISO 639-1 language code ("en" or "ja").
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// English name of the language.
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ja => "Japanese",
        }
    }

    /// The other member of the pair.
    ///
    /// Total over the two-element set: `l.opposite() != l` and
    /// `l.opposite().opposite() == l` for both members.
    pub fn opposite(self) -> Language {
        match self {
            Language::En => Language::Ja,
            Language::Ja => Language::En,
        }
    }

    /// Parse a language code.
    ///
    /// Anything outside the supported pair is rejected with the fixed
    /// language-selection error.
    pub fn from_code(code: &str) -> Result<Language, TranslationApiError> {
        match code {
            "en" => Ok(Language::En),
            "ja" => Ok(Language::Ja),
            _ => Err(TranslationApiError::with_message(
                ErrorCode::InvalidInput,
                "Invalid language selection.",
                400,
            )),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Ja.code(), "ja");
    }

    #[test]
    fn test_names() {
        assert_eq!(Language::En.name(), "English");
        assert_eq!(Language::Ja.name(), "Japanese");
    }

    #[test]
    fn test_opposite_has_no_fixed_point() {
        for lang in [Language::En, Language::Ja] {
            assert_ne!(lang.opposite(), lang);
        }
    }

    #[test]
    fn test_opposite_is_involutive() {
        for lang in [Language::En, Language::Ja] {
            assert_eq!(lang.opposite().opposite(), lang);
        }
    }

    #[test]
    fn test_from_code_valid() {
        assert_eq!(Language::from_code("en").unwrap(), Language::En);
        assert_eq!(Language::from_code("ja").unwrap(), Language::Ja);
    }

    #[test]
    fn test_from_code_invalid() {
        for code in ["fr", "es", "EN", "jp", "", "japanese"] {
            let err = Language::from_code(code).expect_err("should reject");
            assert_eq!(err.code, ErrorCode::InvalidInput);
            assert_eq!(err.status, 400);
            assert_eq!(err.message, "Invalid language selection.");
        }
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Language::Ja).unwrap(), "\"ja\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(Language::En.to_string(), "en");
        assert_eq!(Language::Ja.to_string(), "ja");
    }
}
