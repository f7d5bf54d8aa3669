//! Language switcher: reload the page with a new `lang` query parameter.

use crate::dom::{Document, Selector};
use crate::i18n::{Language, LanguageRegistry};
use tracing::{debug, info};
use url::Url;

/// Marks the language switcher control.
pub const ATTR_SWITCHER: &str = "data-i18n-switcher";

/// Query parameter carrying an explicit language choice.
pub const LANG_PARAM: &str = "lang";

/// Page location and full-page navigation.
pub trait Navigator {
    fn current_url(&self) -> Url;

    fn navigate(&mut self, url: Url);
}

/// Navigator that only records where it was sent.
#[derive(Debug, Clone)]
pub struct RecordingNavigator {
    url: Url,
    visited: Vec<Url>,
}

impl RecordingNavigator {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            visited: Vec::new(),
        }
    }

    pub fn visited(&self) -> &[Url] {
        &self.visited
    }
}

impl Navigator for RecordingNavigator {
    fn current_url(&self) -> Url {
        self.url.clone()
    }

    fn navigate(&mut self, url: Url) {
        self.url = url.clone();
        self.visited.push(url);
    }
}

/// First value of the `lang` query parameter, if present.
pub fn lang_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == LANG_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Copy of `url` with `lang` set to `code`.
///
/// The first existing `lang` pair is replaced in place and any further ones
/// are dropped; when absent, the pair is appended. Other pairs keep their
/// order.
pub fn with_lang_param(url: &Url, code: &str) -> Url {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (name, value) in url.query_pairs() {
        if name == LANG_PARAM {
            if !replaced {
                pairs.push((name.into_owned(), code.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((name.into_owned(), value.into_owned()));
        }
    }
    if !replaced {
        pairs.push((LANG_PARAM.to_string(), code.to_string()));
    }

    let mut target = url.clone();
    target.query_pairs_mut().clear().extend_pairs(pairs);
    target
}

/// A switcher control bound to the page's resolved language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitcherBinding<N> {
    control: N,
    language: Language,
}

impl<N: Copy + Eq + std::fmt::Debug> SwitcherBinding<N> {
    /// Find the switcher control and show the resolved language in it.
    pub fn bind<D: Document<Node = N>>(doc: &mut D, language: Language) -> Option<Self> {
        let control = doc.query_first(&Selector::Attribute(ATTR_SWITCHER))?;
        doc.set_value(control, language.code());
        debug!("Bound language switcher to '{}'", language.code());
        Some(Self { control, language })
    }

    pub fn control(&self) -> N {
        self.control
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Handle a change event: navigate when the chosen value is supported.
    ///
    /// Returns the navigation target, or `None` when the value was ignored.
    pub fn on_change<D, V>(&self, doc: &D, navigator: &mut V) -> Option<Url>
    where
        D: Document<Node = N>,
        V: Navigator,
    {
        let chosen = doc.value(self.control).unwrap_or_default();
        if !LanguageRegistry::get().is_supported(&chosen) {
            debug!("Ignoring unsupported switcher value '{}'", chosen);
            return None;
        }

        let target = with_lang_param(&navigator.current_url(), &chosen);
        info!("Switching language to '{}'", chosen);
        navigator.navigate(target.clone());
        Some(target)
    }
}
