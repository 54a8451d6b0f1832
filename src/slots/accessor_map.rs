//! Accessor maps - per-slot members looked up by PascalCase name.

use std::ops::Index;

use indexmap::IndexMap;

use super::names::SlotNames;

/// Ordered map from accessor name (`"Header"`) to a per-slot member.
///
/// Iteration follows declaration order. When two names collide after
/// casing, the later declaration wins.
pub struct AccessorMap<T> {
    entries: IndexMap<String, T>,
}

impl<T> AccessorMap<T> {
    /// Build one member per declared name. `build` receives the slot name
    /// and its accessor name.
    pub(crate) fn from_names(names: &SlotNames, mut build: impl FnMut(&str, String) -> T) -> Self {
        let mut entries = IndexMap::with_capacity(names.len());
        for (accessor, name) in names.accessors() {
            let member = build(name, accessor.clone());
            entries.insert(accessor, member);
        }
        Self { entries }
    }

    pub fn get(&self, accessor: &str) -> Option<&T> {
        self.entries.get(accessor)
    }

    pub fn contains(&self, accessor: &str) -> bool {
        self.entries.contains_key(accessor)
    }

    /// `(accessor name, member)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(accessor, member)| (accessor.as_str(), member))
    }

    pub fn accessors(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Index<&str> for AccessorMap<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if no slot maps to `accessor`.
    fn index(&self, accessor: &str) -> &T {
        match self.entries.get(accessor) {
            Some(member) => member,
            None => panic!("no slot accessor named '{}'", accessor),
        }
    }
}
