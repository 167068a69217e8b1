//! Headless stand-in for the DOM node a binder attaches to.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::style::StyleTarget;

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(u64);

impl ElementId {
    fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el-{}", self.0)
    }
}

/// Inline `style` declarations of one element, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineStyle {
    declarations: IndexMap<String, String>,
}

impl InlineStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_property(&mut self, name: &str, value: &str) {
        self.declarations.insert(name.to_owned(), value.to_owned());
    }

    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.declarations.shift_remove(name)
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.declarations.get(name).map(String::as_str)
    }

    /// Declarations whose name starts with `--`.
    pub fn custom_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .filter(|(name, _)| name.starts_with("--"))
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serializes the declarations as a `style` attribute value.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    tag: String,
    attributes: IndexMap<String, String>,
    style: InlineStyle,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: ElementId::next(),
            tag: tag.into(),
            attributes: IndexMap::new(),
            style: InlineStyle::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    #[must_use]
    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut InlineStyle {
        &mut self.style
    }
}

impl StyleTarget for InlineStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        InlineStyle::set_property(self, name, value);
    }

    fn remove_property(&mut self, name: &str) {
        InlineStyle::remove_property(self, name);
    }

    fn property(&self, name: &str) -> Option<&str> {
        InlineStyle::property(self, name)
    }
}

impl StyleTarget for Element {
    fn set_property(&mut self, name: &str, value: &str) {
        self.style.set_property(name, value);
    }

    fn remove_property(&mut self, name: &str) {
        self.style.remove_property(name);
    }

    fn property(&self, name: &str) -> Option<&str> {
        self.style.property(name)
    }
}
