//! Core arrays: the shape of the view tree.
//!
//! - componentType: what kind of node (root, element, text, fragment)
//! - parentIndex: parent in hierarchy
//! - children: ordered child indices, in render order
//! - tag: element tag for `element()` nodes
//!
//! Values are stored directly. Nothing here is reactive; reactivity lives in
//! the effects that create and release nodes.

use std::cell::RefCell;

use crate::types::ComponentType;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Node kind.
    static COMPONENT_TYPE: RefCell<Vec<ComponentType>> = const { RefCell::new(Vec::new()) };

    /// Parent node index (None for roots).
    static PARENT_INDEX: RefCell<Vec<Option<usize>>> = const { RefCell::new(Vec::new()) };

    /// Child indices in render order.
    static CHILDREN: RefCell<Vec<Vec<usize>>> = const { RefCell::new(Vec::new()) };

    /// Element tag.
    static TAG: RefCell<Vec<Option<String>>> = const { RefCell::new(Vec::new()) };
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    COMPONENT_TYPE.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(ComponentType::None);
        }
    });
    PARENT_INDEX.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(None);
        }
    });
    CHILDREN.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(Vec::new());
        }
    });
    TAG.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(None);
        }
    });
}

/// Clear values at index (called when releasing).
///
/// Also detaches the index from its parent's child list.
pub fn clear_at_index(index: usize) {
    if let Some(parent) = get_parent_index(index) {
        CHILDREN.with(|arr| {
            if let Some(siblings) = arr.borrow_mut().get_mut(parent) {
                siblings.retain(|&child| child != index);
            }
        });
    }

    COMPONENT_TYPE.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = ComponentType::None;
        }
    });
    PARENT_INDEX.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = None;
        }
    });
    CHILDREN.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            slot.clear();
        }
    });
    TAG.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = None;
        }
    });
}

/// Reset all arrays.
pub fn reset() {
    COMPONENT_TYPE.with(|arr| arr.borrow_mut().clear());
    PARENT_INDEX.with(|arr| arr.borrow_mut().clear());
    CHILDREN.with(|arr| arr.borrow_mut().clear());
    TAG.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Component Type
// =============================================================================

pub fn get_component_type(index: usize) -> ComponentType {
    COMPONENT_TYPE.with(|arr| arr.borrow().get(index).copied().unwrap_or_default())
}

pub fn set_component_type(index: usize, component_type: ComponentType) {
    ensure_capacity(index);
    COMPONENT_TYPE.with(|arr| arr.borrow_mut()[index] = component_type);
}

// =============================================================================
// Hierarchy
// =============================================================================

pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.borrow().get(index).copied().flatten())
}

/// Attach `index` under `parent`, appending it to the parent's child list.
pub fn set_parent_index(index: usize, parent: Option<usize>) {
    ensure_capacity(index);
    let previous = get_parent_index(index);
    if previous == parent {
        return;
    }

    if let Some(previous) = previous {
        CHILDREN.with(|arr| {
            if let Some(siblings) = arr.borrow_mut().get_mut(previous) {
                siblings.retain(|&child| child != index);
            }
        });
    }

    PARENT_INDEX.with(|arr| arr.borrow_mut()[index] = parent);

    if let Some(parent) = parent {
        ensure_capacity(parent);
        CHILDREN.with(|arr| arr.borrow_mut()[parent].push(index));
    }
}

/// Child indices of `index` in render order.
pub fn get_children(index: usize) -> Vec<usize> {
    CHILDREN.with(|arr| arr.borrow().get(index).cloned().unwrap_or_default())
}

// =============================================================================
// Tag
// =============================================================================

pub fn get_tag(index: usize) -> Option<String> {
    TAG.with(|arr| arr.borrow().get(index).cloned().flatten())
}

pub fn set_tag(index: usize, tag: impl Into<String>) {
    ensure_capacity(index);
    TAG.with(|arr| arr.borrow_mut()[index] = Some(tag.into()));
}
