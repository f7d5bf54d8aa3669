//! Document abstraction consumed by the localizer.
//!
//! `Document` is the seam between the localization pipeline and whatever
//! hosts the page: a browser binding or the in-memory [`MemoryDocument`]
//! used by the preview binary and tests.

use std::collections::BTreeMap;
use std::fmt::Debug;

/// Loading phase of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

/// The element selectors the localizer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `[attribute]`
    Attribute(&'a str),
    /// `tag[attribute]`
    TagWithAttribute { tag: &'a str, attribute: &'a str },
}

/// Minimal DOM surface used for translation.
pub trait Document {
    type Node: Copy + Eq + Debug;

    /// The document root (`<html>`).
    fn root(&self) -> Self::Node;

    fn ready_state(&self) -> ReadyState;

    /// The script element that loaded the localizer, if known.
    fn current_script(&self) -> Option<Self::Node>;

    /// All matching elements, in document order.
    fn query_all(&self, selector: &Selector<'_>) -> Vec<Self::Node>;

    fn query_first(&self, selector: &Selector<'_>) -> Option<Self::Node> {
        self.query_all(selector).into_iter().next()
    }

    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    fn set_text_content(&mut self, node: Self::Node, text: &str);

    /// Add `class` when `force` is true, remove it otherwise.
    fn toggle_class(&mut self, node: Self::Node, class: &str, force: bool);

    /// Current value of a form control.
    fn value(&self, node: Self::Node) -> Option<String>;

    fn set_value(&mut self, node: Self::Node, value: &str);
}

/// Handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A detached element description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub classes: Vec<String>,
    pub text: String,
    pub value: Option<String>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn matches(&self, selector: &Selector<'_>) -> bool {
        match selector {
            Selector::Attribute(attribute) => self.attributes.contains_key(*attribute),
            Selector::TagWithAttribute { tag, attribute } => {
                self.tag.eq_ignore_ascii_case(tag) && self.attributes.contains_key(*attribute)
            }
        }
    }
}

/// What a recorded mutation touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    Attribute(String),
    Text,
    Class(String),
    Value,
}

/// One write applied to a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub node: NodeId,
    pub kind: MutationKind,
}

/// Flat in-memory document. Element 0 is the `<html>` root; appended
/// elements follow in document order.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    elements: Vec<Element>,
    current_script: Option<NodeId>,
    ready_state: ReadyState,
    mutations: Vec<Mutation>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("html")],
            current_script: None,
            ready_state: ReadyState::Complete,
            mutations: Vec::new(),
        }
    }

    pub fn append(&mut self, element: Element) -> NodeId {
        self.elements.push(element);
        NodeId(self.elements.len() - 1)
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    pub fn set_current_script(&mut self, node: NodeId) {
        self.current_script = Some(node);
    }

    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.ready_state = state;
    }

    /// Every write applied since the document was built.
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    fn element_mut(&mut self, node: NodeId, kind: MutationKind) -> Option<&mut Element> {
        let element = self.elements.get_mut(node.0)?;
        self.mutations.push(Mutation { node, kind });
        Some(element)
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    fn current_script(&self) -> Option<NodeId> {
        self.current_script
    }

    fn query_all(&self, selector: &Selector<'_>) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.matches(selector))
            .map(|(idx, _)| NodeId(idx))
            .collect()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(element) = self.element_mut(node, MutationKind::Attribute(name.to_string())) {
            element.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.element_mut(node, MutationKind::Text) {
            element.text = text.to_string();
        }
    }

    fn toggle_class(&mut self, node: NodeId, class: &str, force: bool) {
        if let Some(element) = self.element_mut(node, MutationKind::Class(class.to_string())) {
            let present = element.has_class(class);
            if force && !present {
                element.classes.push(class.to_string());
            } else if !force && present {
                element.classes.retain(|c| c != class);
            }
        }
    }

    fn value(&self, node: NodeId) -> Option<String> {
        self.element(node)?.value.clone()
    }

    fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(element) = self.element_mut(node, MutationKind::Value) {
            element.value = Some(value.to_string());
        }
    }
}
