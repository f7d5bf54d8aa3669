//! Lightweight page localization: resolve the visitor's language, fetch its
//! dictionary and rewrite `data-i18n` marked elements.

pub mod config;
pub mod dom;
pub mod i18n;
pub mod loader;
pub mod localizer;
pub mod storage;
pub mod substitute;
pub mod switcher;

pub use localizer::{Localizer, PageState};
