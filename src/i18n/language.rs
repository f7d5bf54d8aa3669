//! Language type: validated language representation.
//!
//! A `Language` can only be built from a code present in the
//! registry, so every resolved page language is a member of the supported set.

use crate::i18n::{Direction, LanguageConfig, LanguageRegistry};
use thiserror::Error;

/// Error returned when a code is not a usable site language.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'")]
    Unknown(String),
}

/// A validated site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Short language code (e.g., "en", "ar")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const ARABIC: Language = Language { code: "ar" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is supported
    /// * `Err(LanguageError)` if the code is unknown
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => Err(LanguageError::Unknown(code.to_string())),
        }
    }

    /// Get the canonical (fallback) language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Native name of the language, as shown in a switcher.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn direction(&self) -> Direction {
        self.config().direction
    }

    /// Whether the language is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

/// Check whether a raw code is right-to-left. Unknown codes are left-to-right.
pub fn is_rtl(code: &str) -> bool {
    Language::from_code(code)
        .map(|lang| lang.is_rtl())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.native_name(), "English");
        assert_eq!(english.direction(), Direction::Ltr);
        assert!(!english.is_rtl());
    }

    #[test]
    fn test_arabic_constant() {
        let arabic = Language::ARABIC;
        assert_eq!(arabic.code(), "ar");
        assert_eq!(arabic.native_name(), "العربية");
        assert!(arabic.is_rtl());
        assert_eq!(arabic.direction(), Direction::Rtl);
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_every_supported_code() {
        for code in ["en", "ru", "es", "de", "fr", "pt", "it", "ar", "zh", "ja", "hi", "tr"] {
            let language = Language::from_code(code).expect("Should succeed");
            assert_eq!(language.code(), code);
        }
    }

    #[test]
    fn test_from_code_unknown() {
        let result = Language::from_code("ko");
        assert_eq!(result, Err(LanguageError::Unknown("ko".to_string())));
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
        assert!(Language::from_code("pt-BR").is_err());
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== canonical Tests ====================

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
    }

    // ==================== RTL Tests ====================

    #[test]
    fn test_is_rtl_only_for_arabic() {
        for code in ["en", "ru", "es", "de", "fr", "pt", "it", "zh", "ja", "hi", "tr"] {
            assert!(!is_rtl(code), "{} should be ltr", code);
        }
        assert!(is_rtl("ar"));
    }

    #[test]
    fn test_is_rtl_unknown_code() {
        assert!(!is_rtl("he"));
        assert!(!is_rtl(""));
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_writes_code() {
        assert_eq!(Language::ARABIC.to_string(), "ar");
    }

    #[test]
    fn test_language_equality() {
        assert_eq!(Language::ENGLISH, Language::from_code("en").unwrap());
        assert_ne!(Language::ENGLISH, Language::ARABIC);
    }
}
