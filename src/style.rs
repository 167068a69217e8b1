//! Custom-property binder.
//!
//! [`StyleVars`] keeps an element's `--name` inline properties in exact
//! correspondence with the last [`StyleMap`] it was given: after any update
//! the set of properties it owns equals the map's key set.

use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Inline-style surface of an element.
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
    fn property(&self, name: &str) -> Option<&str>;
}

impl<T: StyleTarget + ?Sized> StyleTarget for &mut T {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }

    fn remove_property(&mut self, name: &str) {
        (**self).remove_property(name);
    }

    fn property(&self, name: &str) -> Option<&str> {
        (**self).property(name)
    }
}

/// Ordered mapping of custom-property keys (without `--`) to values.
///
/// Values are stored already stringified; they are not validated as CSS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    entries: IndexMap<String, String>,
}

impl StyleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.entries.insert(key.into(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Property name a map key is applied under.
#[must_use]
pub fn custom_property_name(key: &str) -> String {
    format!("--{key}")
}

/// Custom-property binding owned by one element.
#[derive(Debug)]
pub struct StyleVars<T: StyleTarget> {
    target: T,
    applied: StyleMap,
}

impl<T: StyleTarget> StyleVars<T> {
    /// Sets one custom property per entry of `initial`.
    pub fn attach(mut target: T, initial: StyleMap) -> Self {
        for (key, value) in initial.iter() {
            target.set_property(&custom_property_name(key), value);
        }
        debug!(properties = initial.len(), "attach style vars");
        Self {
            target,
            applied: initial,
        }
    }

    /// Moves the element to `next`.
    ///
    /// Keys with a changed or new value are set, keys missing from `next` are
    /// removed. Values identical to the previously applied ones are left alone.
    pub fn update(&mut self, next: StyleMap) {
        let mut written = 0usize;
        for (key, value) in next.iter() {
            if self.applied.get(key) != Some(value) {
                self.target.set_property(&custom_property_name(key), value);
                written += 1;
            }
        }

        let mut removed = 0usize;
        for key in self.applied.keys() {
            if !next.contains_key(key) {
                self.target.remove_property(&custom_property_name(key));
                removed += 1;
            }
        }

        trace!(written, removed, total = next.len(), "update style vars");
        self.applied = next;
    }

    /// Removes every property this binding set and hands the element back.
    pub fn detach(mut self) -> T {
        for key in self.applied.keys() {
            self.target.remove_property(&custom_property_name(key));
        }
        debug!(properties = self.applied.len(), "detach style vars");
        self.target
    }

    #[must_use]
    pub fn applied(&self) -> &StyleMap {
        &self.applied
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }
}
