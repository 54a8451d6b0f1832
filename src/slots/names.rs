//! Slot names and accessor naming.
//!
//! Every declared slot name maps to an accessor name by UpperCamelCase:
//! `"content"` → `Content`, `"nav-bar"` → `NavBar`, `"my.slot"` → `MySlot`.

use std::collections::HashMap;
use std::rc::Rc;

use heck::ToUpperCamelCase;

use crate::error::SlotError;

/// Accessor name for a slot name.
///
/// Words are split at `-`, `_`, `.`, whitespace and case changes, then
/// each word is capitalized and joined.
pub fn pascal_case(name: &str) -> String {
    name.to_upper_camel_case()
}

/// Ordered list of slot names declared by a container.
///
/// Fixed once built; clones share the same list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotNames(Rc<[String]>);

impl SlotNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|declared| declared == name)
    }

    /// `(accessor name, slot name)` pairs in declaration order.
    pub fn accessors(&self) -> impl Iterator<Item = (String, &str)> {
        self.iter().map(|name| (pascal_case(name), name))
    }

    /// Check the list for names that cannot produce distinct accessors.
    pub fn validate(&self) -> Result<(), SlotError> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for (position, name) in self.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(SlotError::EmptyName(position));
            }
            let accessor = pascal_case(name);
            if let Some(first) = seen.insert(accessor.clone(), name) {
                return Err(if first == name {
                    SlotError::DuplicateName(name.to_string())
                } else {
                    SlotError::CasingCollision {
                        first: first.to_string(),
                        second: name.to_string(),
                        accessor,
                    }
                });
            }
        }
        Ok(())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for SlotNames {
    fn from(names: [S; N]) -> Self {
        Self::new(names)
    }
}

impl<S: Into<String>> From<Vec<S>> for SlotNames {
    fn from(names: Vec<S>) -> Self {
        Self::new(names)
    }
}

impl From<&[&str]> for SlotNames {
    fn from(names: &[&str]) -> Self {
        Self::new(names.iter().copied())
    }
}

impl From<&SlotNames> for SlotNames {
    fn from(names: &SlotNames) -> Self {
        names.clone()
    }
}
