//! Text Primitive - Display text.
//!
//! A pure display component for text content. Cannot have children.
//!
//! # Reactivity
//!
//! Content can be a static string, signal, or getter. The content source is
//! stored as-is, so reading the tree always shows the current value.
//!
//! # Example
//!
//! ```ignore
//! use spark_slots::{text, text_node, TextProps, PropValue};
//! use spark_signals::signal;
//!
//! // Static text
//! text("Hello, World!");
//!
//! // Reactive text
//! let count = signal(0);
//! let count_clone = count.clone();
//! text(PropValue::getter(move || format!("Count: {}", count_clone.get())));
//!
//! // Update count - text updates automatically
//! count.set(42);
//! ```

use crate::engine::arrays::{core, text as text_arrays};
use crate::engine::{allocate_index, get_current_parent_index, release_index};
use crate::types::{ComponentType, Node};
use super::types::{Cleanup, PropValue, TextProps};

// =============================================================================
// Text Component
// =============================================================================

/// Create a text display component.
///
/// Returns a cleanup function that releases resources when called.
pub fn text(props: impl Into<TextProps>) -> Cleanup {
    let props = props.into();

    // 1. ALLOCATE INDEX
    let index = allocate_index(props.id.as_deref());

    // 2. CORE SETUP - Type, parent
    core::set_component_type(index, ComponentType::Text);
    if let Some(parent) = get_current_parent_index() {
        core::set_parent_index(index, Some(parent));
    }

    // 3. BIND TEXT CONTENT
    text_arrays::set_text_content(index, props.content);

    Box::new(move || release_index(index))
}

/// A node that renders a single text leaf.
pub fn text_node(content: impl Into<PropValue<String>>) -> Node {
    let content = content.into();
    Node::new(move || {
        let _cleanup = text(content.clone());
    })
}

// =============================================================================
// Tests
// =============================================================================
