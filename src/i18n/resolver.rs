//! Language resolution: picks exactly one supported language per page load.
//!
//! Resolution order (first match wins):
//! 1. Explicit `lang` query parameter, if supported
//! 2. Persisted preference, if supported
//! 3. Browser locale, normalized through [`normalize_locale`]
//!
//! The outcome is always validated against the registry and collapses to the
//! canonical language otherwise. Resolution never fails.

use crate::i18n::Language;
use tracing::debug;

/// Raw signals available when a page loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSignals {
    /// Value of the `lang` query parameter
    pub query_param: Option<String>,
    /// Previously persisted preference
    pub stored: Option<String>,
    /// Locale reported by the browser (e.g., "pt-BR")
    pub browser_locale: Option<String>,
}

/// Which signal produced the resolved language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    QueryParam,
    Stored,
    BrowserLocale,
    Default,
}

/// Browser locale forms mapped onto supported codes. Keys are lowercase.
const LOCALE_MAP: &[(&str, &str)] = &[
    ("zh-cn", "zh"),
    ("zh", "zh"),
    ("zh-tw", "zh"),
    ("pt-br", "pt"),
    ("pt-pt", "pt"),
    ("en-us", "en"),
    ("en-gb", "en"),
    ("es-es", "es"),
    ("es-419", "es"),
    ("de-de", "de"),
    ("fr-fr", "fr"),
    ("it-it", "it"),
    ("ar", "ar"),
    ("ar-ae", "ar"),
    ("ar-eg", "ar"),
    ("ar-sa", "ar"),
    ("ja-jp", "ja"),
    ("hi-in", "hi"),
    ("tr-tr", "tr"),
    ("ru-ru", "ru"),
];

/// Normalize a browser-reported locale into a candidate code.
///
/// The result is not guaranteed to be supported: "ko-KR" normalizes to "ko".
/// An absent or empty locale normalizes to the canonical code.
pub fn normalize_locale(locale: Option<&str>) -> String {
    let canonical = Language::canonical().code();
    let locale = match locale {
        Some(l) if !l.is_empty() => l.to_lowercase(),
        _ => return canonical.to_string(),
    };

    if let Some((_, code)) = LOCALE_MAP.iter().find(|(key, _)| *key == locale) {
        return code.to_string();
    }

    match locale.split('-').next() {
        Some(primary) if !primary.is_empty() => primary.to_string(),
        _ => canonical.to_string(),
    }
}

/// Resolve the page language from the given signals.
pub fn resolve_language(signals: &LanguageSignals) -> (Language, LanguageSource) {
    let supported = |value: &Option<String>| {
        value
            .as_deref()
            .and_then(|code| Language::from_code(code).ok())
    };

    let (language, source) = if let Some(lang) = supported(&signals.query_param) {
        (lang, LanguageSource::QueryParam)
    } else if let Some(lang) = supported(&signals.stored) {
        (lang, LanguageSource::Stored)
    } else {
        let candidate = normalize_locale(signals.browser_locale.as_deref());
        match Language::from_code(&candidate) {
            Ok(lang) => (lang, LanguageSource::BrowserLocale),
            Err(_) => (Language::canonical(), LanguageSource::Default),
        }
    };

    debug!(
        "Resolved language '{}' from {:?} (signals: {:?})",
        language.code(),
        source,
        signals
    );

    (language, source)
}
