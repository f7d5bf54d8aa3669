//! Internationalization (i18n) core: supported languages, resolution and
//! dictionary lookup.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Validated `Language` type built only from registry codes
//! - `resolver`: Priority chain (query param, stored preference, browser locale)
//! - `dictionary`: Nested translation dictionary with dot-path lookup
//!
//! # Example
//!
//! ```rust
//! use site_i18n::i18n::{resolve_language, Language, LanguageSignals};
//!
//! let signals = LanguageSignals {
//!     query_param: None,
//!     stored: None,
//!     browser_locale: Some("pt-BR".to_string()),
//! };
//! let (language, _source) = resolve_language(&signals);
//! assert_eq!(language, Language::from_code("pt").unwrap());
//! ```

mod dictionary;
mod language;
mod registry;
mod resolver;

pub use dictionary::Dictionary;
pub use language::{is_rtl, Language, LanguageError};
pub use registry::{Direction, LanguageConfig, LanguageRegistry};
pub use resolver::{normalize_locale, resolve_language, LanguageSignals, LanguageSource};
