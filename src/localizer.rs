//! The page localization pipeline.
//!
//! ```text
//! Unresolved -> Resolved -> AttributesSet -> DictionaryPending -> Translated
//!                                                              \-> Skipped
//! ```
//!
//! A `Localizer` runs the pipeline at most once. A failed dictionary load is
//! logged and leaves the page in its source language; nothing is returned to
//! the caller as an error.

use crate::dom::{Document, ReadyState};
use crate::i18n::{resolve_language, Dictionary, Language, LanguageSignals};
use crate::loader::{dictionary_url, DictionarySource};
use crate::storage::{PreferenceStore, PREFERENCE_KEY};
use crate::substitute::{apply_translations, set_language_attributes, TranslationReport};
use crate::switcher::{lang_param, Navigator, SwitcherBinding};
use tracing::{debug, error, info, warn};
use url::Url;

/// Attribute on the loading script giving the dictionary path prefix.
pub const ATTR_BASE: &str = "data-base";

/// Progress of one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Unresolved,
    Resolved(Language),
    AttributesSet(Language),
    DictionaryPending(Language),
    Translated(Language),
    Skipped(Language),
}

impl PageState {
    pub fn language(&self) -> Option<Language> {
        match self {
            PageState::Unresolved => None,
            PageState::Resolved(lang)
            | PageState::AttributesSet(lang)
            | PageState::DictionaryPending(lang)
            | PageState::Translated(lang)
            | PageState::Skipped(lang) => Some(*lang),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PageState::Translated(_) | PageState::Skipped(_))
    }
}

/// Localizes one page load of a document.
pub struct Localizer<D: Document, S, L> {
    document: D,
    store: S,
    loader: L,
    page_url: Url,
    browser_locale: Option<String>,
    state: PageState,
    dictionary: Option<Dictionary>,
    report: Option<TranslationReport>,
    switcher: Option<SwitcherBinding<D::Node>>,
}

impl<D, S, L> Localizer<D, S, L>
where
    D: Document,
    S: PreferenceStore,
    L: DictionarySource,
{
    pub fn new(
        document: D,
        store: S,
        loader: L,
        page_url: Url,
        browser_locale: Option<String>,
    ) -> Self {
        Self {
            document,
            store,
            loader,
            page_url,
            browser_locale,
            state: PageState::Unresolved,
            dictionary: None,
            report: None,
            switcher: None,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The dictionary of this page load, once fetched.
    pub fn dictionary(&self) -> Option<&Dictionary> {
        self.dictionary.as_ref()
    }

    /// Substitution counts, once the page is translated.
    pub fn report(&self) -> Option<TranslationReport> {
        self.report
    }

    pub fn switcher(&self) -> Option<&SwitcherBinding<D::Node>> {
        self.switcher.as_ref()
    }

    /// Signals as seen at this point of the page load.
    pub fn signals(&self) -> LanguageSignals {
        LanguageSignals {
            query_param: lang_param(&self.page_url),
            stored: self.store.get_item(PREFERENCE_KEY),
            browser_locale: self.browser_locale.clone(),
        }
    }

    /// Start localization, unless the document is still loading.
    ///
    /// Returns `None` when deferred; the host then calls [`Self::init`] once
    /// the document becomes ready.
    pub async fn start(&mut self) -> Option<PageState> {
        if self.document.ready_state() == ReadyState::Loading {
            debug!("Document still loading, deferring localization");
            return None;
        }
        Some(self.init().await)
    }

    /// Run the pipeline. Later calls return the state of the first run.
    pub async fn init(&mut self) -> PageState {
        if self.state != PageState::Unresolved {
            debug!("Localizer already ran ({:?})", self.state);
            return self.state;
        }

        let (language, source) = resolve_language(&self.signals());
        self.state = PageState::Resolved(language);
        info!("Page language: {} ({:?})", language.code(), source);

        set_language_attributes(&mut self.document, language);
        self.state = PageState::AttributesSet(language);

        if let Err(e) = self.store.set_item(PREFERENCE_KEY, language.code()) {
            warn!("Failed to persist language preference: {}", e);
        }

        let prefix = self
            .document
            .current_script()
            .and_then(|script| self.document.attribute(script, ATTR_BASE))
            .unwrap_or_default();

        let url = match dictionary_url(&self.page_url, &prefix, language) {
            Ok(url) => url,
            Err(e) => {
                error!("{}", e);
                self.state = PageState::Skipped(language);
                return self.state;
            }
        };

        self.state = PageState::DictionaryPending(language);
        let dict = match self.loader.load(&url).await {
            Ok(dict) => dict,
            Err(e) => {
                error!("{}", e);
                self.state = PageState::Skipped(language);
                return self.state;
            }
        };

        let report = apply_translations(&mut self.document, &dict);
        info!(
            "Translated {} elements into {} ({} keys missing)",
            report.total(),
            language.code(),
            report.missing
        );
        self.report = Some(report);
        self.dictionary = Some(dict);
        self.switcher = SwitcherBinding::bind(&mut self.document, language);
        self.state = PageState::Translated(language);
        self.state
    }

    /// Forward a change of the switcher control to the navigator.
    ///
    /// Does nothing unless the page was translated and has a switcher.
    pub fn on_switcher_change<N: Navigator>(&self, navigator: &mut N) -> Option<Url> {
        self.switcher.as_ref()?.on_change(&self.document, navigator)
    }

    /// Mutable document access for the host, e.g. to reflect user input.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn into_parts(self) -> (D, S) {
        (self.document, self.store)
    }
}
