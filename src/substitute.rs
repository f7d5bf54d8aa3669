//! Document mutation: root language attributes and marker substitution.

use crate::dom::{Document, Selector};
use crate::i18n::{Dictionary, Language};
use tracing::debug;

/// Element text/attribute key marker.
pub const ATTR_KEY: &str = "data-i18n";
/// Names the attribute that receives the translation instead of the text.
pub const ATTR_TARGET: &str = "data-i18n-attr";
/// Placeholder key marker.
pub const ATTR_PLACEHOLDER: &str = "data-i18n-placeholder";

/// Counts of what a translation pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationReport {
    pub text: usize,
    pub attributes: usize,
    pub placeholders: usize,
    pub title: bool,
    /// Keys with no string translation; those elements are left untouched
    pub missing: usize,
}

impl TranslationReport {
    pub fn total(&self) -> usize {
        self.text + self.attributes + self.placeholders + usize::from(self.title)
    }
}

/// Set `lang`, `dir` and the `rtl` class on the document root.
pub fn set_language_attributes<D: Document>(doc: &mut D, language: Language) {
    let root = doc.root();
    doc.set_attribute(root, "lang", language.code());
    doc.set_attribute(root, "dir", language.direction().as_str());
    doc.toggle_class(root, "rtl", language.is_rtl());
}

/// Rewrite every marked element that has a translation in `dict`.
pub fn apply_translations<D: Document>(doc: &mut D, dict: &Dictionary) -> TranslationReport {
    let mut report = TranslationReport::default();

    for node in doc.query_all(&Selector::Attribute(ATTR_KEY)) {
        let Some(key) = doc.attribute(node, ATTR_KEY).filter(|k| !k.is_empty()) else {
            continue;
        };
        let Some(value) = dict.lookup(&key) else {
            debug!("No translation for '{}'", key);
            report.missing += 1;
            continue;
        };
        match doc.attribute(node, ATTR_TARGET).filter(|a| !a.is_empty()) {
            Some(target) => {
                doc.set_attribute(node, &target, value);
                report.attributes += 1;
            }
            None => {
                doc.set_text_content(node, value);
                report.text += 1;
            }
        }
    }

    for node in doc.query_all(&Selector::Attribute(ATTR_PLACEHOLDER)) {
        let key = doc.attribute(node, ATTR_PLACEHOLDER).unwrap_or_default();
        match dict.lookup(&key) {
            Some(value) => {
                doc.set_attribute(node, "placeholder", value);
                report.placeholders += 1;
            }
            None => report.missing += 1,
        }
    }

    let title = Selector::TagWithAttribute {
        tag: "title",
        attribute: ATTR_KEY,
    };
    if let Some(node) = doc.query_first(&title) {
        let key = doc.attribute(node, ATTR_KEY).unwrap_or_default();
        if let Some(value) = dict.lookup(&key) {
            doc.set_text_content(node, value);
            report.title = true;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, MemoryDocument, MutationKind};
    use serde_json::json;

    fn dict() -> Dictionary {
        Dictionary::new(json!({
            "meta": { "title": "Acerca de" },
            "nav": { "home": "Inicio", "search": "Buscar" },
            "form": { "email": "Correo electrónico" },
            "a": { "b": "X" }
        }))
    }

    fn text_of(doc: &MemoryDocument, node: crate::dom::NodeId) -> String {
        doc.element(node).unwrap().text.clone()
    }

    // ==================== set_language_attributes Tests ====================

    #[test]
    fn test_attributes_for_ltr_language() {
        let mut doc = MemoryDocument::new();
        set_language_attributes(&mut doc, Language::from_code("ja").unwrap());

        let root = doc.root();
        assert_eq!(doc.attribute(root, "lang").as_deref(), Some("ja"));
        assert_eq!(doc.attribute(root, "dir").as_deref(), Some("ltr"));
        assert!(!doc.element(root).unwrap().has_class("rtl"));
    }

    #[test]
    fn test_attributes_for_arabic() {
        let mut doc = MemoryDocument::new();
        set_language_attributes(&mut doc, Language::ARABIC);

        let root = doc.root();
        assert_eq!(doc.attribute(root, "lang").as_deref(), Some("ar"));
        assert_eq!(doc.attribute(root, "dir").as_deref(), Some("rtl"));
        assert!(doc.element(root).unwrap().has_class("rtl"));
    }

    #[test]
    fn test_attributes_are_idempotent() {
        let mut once = MemoryDocument::new();
        set_language_attributes(&mut once, Language::ARABIC);

        let mut twice = MemoryDocument::new();
        set_language_attributes(&mut twice, Language::ARABIC);
        set_language_attributes(&mut twice, Language::ARABIC);

        assert_eq!(once.element(once.root()), twice.element(twice.root()));
    }

    #[test]
    fn test_switching_back_to_ltr_clears_rtl_class() {
        let mut doc = MemoryDocument::new();
        set_language_attributes(&mut doc, Language::ARABIC);
        set_language_attributes(&mut doc, Language::ENGLISH);

        let root = doc.root();
        assert_eq!(doc.attribute(root, "dir").as_deref(), Some("ltr"));
        assert!(!doc.element(root).unwrap().has_class("rtl"));
    }

    // ==================== apply_translations Tests ====================

    #[test]
    fn test_text_content_replaced() {
        let mut doc = MemoryDocument::new();
        let link = doc.append(
            Element::new("a")
                .with_attribute(ATTR_KEY, "nav.home")
                .with_text("Home"),
        );

        let report = apply_translations(&mut doc, &dict());

        assert_eq!(text_of(&doc, link), "Inicio");
        assert_eq!(report.text, 1);
    }

    #[test]
    fn test_attribute_target_instead_of_text() {
        let mut doc = MemoryDocument::new();
        let button = doc.append(
            Element::new("button")
                .with_attribute(ATTR_KEY, "nav.search")
                .with_attribute(ATTR_TARGET, "aria-label")
                .with_text("🔍"),
        );

        let report = apply_translations(&mut doc, &dict());

        assert_eq!(doc.attribute(button, "aria-label").as_deref(), Some("Buscar"));
        assert_eq!(text_of(&doc, button), "🔍");
        assert_eq!(report.attributes, 1);
        assert_eq!(report.text, 0);
    }

    #[test]
    fn test_empty_attribute_target_falls_back_to_text() {
        let mut doc = MemoryDocument::new();
        let node = doc.append(
            Element::new("span")
                .with_attribute(ATTR_KEY, "nav.home")
                .with_attribute(ATTR_TARGET, ""),
        );

        apply_translations(&mut doc, &dict());
        assert_eq!(text_of(&doc, node), "Inicio");
    }

    #[test]
    fn test_placeholder_replaced() {
        let mut doc = MemoryDocument::new();
        let input =
            doc.append(Element::new("input").with_attribute(ATTR_PLACEHOLDER, "form.email"));

        let report = apply_translations(&mut doc, &dict());

        assert_eq!(doc.attribute(input, "placeholder").as_deref(), Some("Correo electrónico"));
        assert_eq!(report.placeholders, 1);
    }

    #[test]
    fn test_title_replaced() {
        let mut doc = MemoryDocument::new();
        let title = doc.append(
            Element::new("title")
                .with_attribute(ATTR_KEY, "meta.title")
                .with_text("About"),
        );

        let report = apply_translations(&mut doc, &dict());

        assert_eq!(text_of(&doc, title), "Acerca de");
        assert!(report.title);
    }

    #[test]
    fn test_missing_keys_leave_elements_untouched() {
        let mut doc = MemoryDocument::new();
        let missing = doc.append(
            Element::new("p")
                .with_attribute(ATTR_KEY, "a.c")
                .with_text("Original"),
        );
        let through_leaf = doc.append(
            Element::new("p")
                .with_attribute(ATTR_KEY, "a.b.c")
                .with_text("Leaf"),
        );
        doc.append(Element::new("input").with_attribute(ATTR_PLACEHOLDER, "form.phone"));

        let report = apply_translations(&mut doc, &dict());

        assert_eq!(text_of(&doc, missing), "Original");
        assert_eq!(text_of(&doc, through_leaf), "Leaf");
        assert_eq!(report.missing, 3);
        assert_eq!(report.total(), 0);
        assert!(doc.mutations().is_empty());
    }

    #[test]
    fn test_empty_key_is_skipped() {
        let mut doc = MemoryDocument::new();
        let node = doc.append(Element::new("p").with_attribute(ATTR_KEY, "").with_text("Keep"));

        let dict = Dictionary::new(json!({ "": "blank" }));
        let report = apply_translations(&mut doc, &dict);

        assert_eq!(text_of(&doc, node), "Keep");
        assert_eq!(report, TranslationReport::default());
    }

    #[test]
    fn test_markers_are_never_mutated() {
        let mut doc = MemoryDocument::new();
        doc.append(
            Element::new("button")
                .with_attribute(ATTR_KEY, "nav.search")
                .with_attribute(ATTR_TARGET, "title"),
        );
        doc.append(Element::new("input").with_attribute(ATTR_PLACEHOLDER, "form.email"));

        apply_translations(&mut doc, &dict());

        for mutation in doc.mutations() {
            if let MutationKind::Attribute(name) = &mutation.kind {
                assert!(!name.starts_with("data-i18n"), "marker {} was written", name);
            }
        }
    }

    #[test]
    fn test_full_page_report() {
        let mut doc = MemoryDocument::new();
        doc.append(Element::new("title").with_attribute(ATTR_KEY, "meta.title"));
        doc.append(Element::new("a").with_attribute(ATTR_KEY, "nav.home"));
        doc.append(Element::new("input").with_attribute(ATTR_PLACEHOLDER, "form.email"));

        let report = apply_translations(&mut doc, &dict());

        // The title matches both the generic pass and the title pass
        assert_eq!(report.text, 2);
        assert_eq!(report.placeholders, 1);
        assert!(report.title);
        assert_eq!(report.total(), 4);
    }
}
