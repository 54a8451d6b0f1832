//! Text arrays.
//!
//! Text content is stored as a [`PropValue`] so signal and getter content
//! stays connected: reading the array always yields the current value.

use std::cell::RefCell;
use std::mem::ManuallyDrop;

use crate::primitives::PropValue;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Text content source. Never dropped at thread exit; sources may be signals.
    static TEXT_CONTENT: ManuallyDrop<RefCell<Vec<Option<PropValue<String>>>>> =
        const { ManuallyDrop::new(RefCell::new(Vec::new())) };
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    TEXT_CONTENT.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(None);
        }
    });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    TEXT_CONTENT.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = None;
        }
    });
}

/// Reset all arrays.
pub fn reset() {
    TEXT_CONTENT.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Text Content
// =============================================================================

/// Get text content at index (reactive when bound to a signal or getter).
pub fn get_text_content(index: usize) -> String {
    // Clone the source out first: a getter may read other arrays.
    let source = TEXT_CONTENT.with(|arr| arr.borrow().get(index).cloned().flatten());
    source.map(|content| content.get()).unwrap_or_default()
}

/// Bind text content at index.
pub fn set_text_content(index: usize, content: PropValue<String>) {
    ensure_capacity(index);
    TEXT_CONTENT.with(|arr| arr.borrow_mut()[index] = Some(content));
}
