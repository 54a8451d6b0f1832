//! Slot Registry - name → content store for one scope.
//!
//! Writes never re-render anything by themselves. Every effective write
//! bumps a version signal; readers that looked up a slot inside an effect
//! depend on that signal and re-run.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use spark_signals::{signal, Signal};

use crate::types::SlotContent;

pub struct SlotRegistry {
    slots: RefCell<HashMap<String, SlotContent>>,
    /// Untracked copy of the version, so writers never subscribe to it.
    revision: Cell<u64>,
    version: Signal<u64>,
}

impl SlotRegistry {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(HashMap::new()),
            revision: Cell::new(0),
            version: signal(0u64),
        }
    }

    /// Whether `name` has been written (reactive).
    pub fn has(&self, name: &str) -> bool {
        let _ = self.version.get();
        self.slots.borrow().contains_key(name)
    }

    /// Store `content` under `name`.
    ///
    /// Returns false when the same content (by identity) is already stored;
    /// nothing is notified in that case.
    pub fn register(&self, name: &str, content: SlotContent) -> bool {
        {
            let mut slots = self.slots.borrow_mut();
            if slots.get(name) == Some(&content) {
                return false;
            }
            slots.insert(name.to_string(), content);
        }

        let revision = self.revision.get() + 1;
        self.revision.set(revision);
        log::debug!("slot '{}' registered (revision {})", name, revision);

        // Borrow released: readers may run synchronously from here
        self.version.set(revision);
        true
    }

    /// Latest content for `name` (reactive).
    pub fn get(&self, name: &str) -> Option<SlotContent> {
        let _ = self.version.get();
        self.slots.borrow().get(name).cloned()
    }

    /// All entries (reactive).
    pub fn snapshot(&self) -> HashMap<String, SlotContent> {
        let _ = self.version.get();
        self.slots.borrow().clone()
    }

    /// Number of effective writes so far. Not reactive.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }
}

impl Default for SlotRegistry {
    fn default() -> Self {
        Self::new()
    }
}
