//! Language registry: Single source of truth for all supported site languages.
//!
//! The registry is a lazily initialized singleton (`OnceLock`) holding the
//! closed set of language codes the site ships dictionaries for, together
//! with the native display name and text direction of each.

use std::sync::OnceLock;

/// Text direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the document's `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Short language code (e.g., "en", "ar", "zh")
    pub code: &'static str,

    /// Native name of the language (e.g., "العربية")
    pub native_name: &'static str,

    /// Whether this is the default/fallback language (only one should be true)
    pub is_canonical: bool,

    /// Text direction used for the document root
    pub direction: Direction,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact (case-sensitive) code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the canonical (fallback) language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one canonical language.
    /// The registry is static, so this only fires on a broken edit to
    /// `default_languages`.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

const fn ltr(code: &'static str, native_name: &'static str) -> LanguageConfig {
    LanguageConfig {
        code,
        native_name,
        is_canonical: false,
        direction: Direction::Ltr,
    }
}

/// Supported site languages.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            is_canonical: true,
            ..ltr("en", "English")
        },
        ltr("ru", "Русский"),
        ltr("es", "Español"),
        ltr("de", "Deutsch"),
        ltr("fr", "Français"),
        ltr("pt", "Português"),
        ltr("it", "Italiano"),
        LanguageConfig {
            direction: Direction::Rtl,
            ..ltr("ar", "العربية")
        },
        ltr("zh", "中文"),
        ltr("ja", "日本語"),
        ltr("hi", "हिन्दी"),
        ltr("tr", "Türkçe"),
    ]
}
