//! Element Primitive - Tagged container component.
//!
//! The fundamental container. Its children render with the element as
//! their parent, so they appear inside it in the rendered markup.
//!
//! # Example
//!
//! ```ignore
//! use spark_slots::{element, text, ElementProps, Node};
//!
//! let cleanup = element(ElementProps {
//!     tag: "footer".into(),
//!     children: Some(Node::new(|| {
//!         text("(c) 2026");
//!     })),
//!     ..Default::default()
//! });
//! ```

use crate::engine::arrays::core;
use crate::engine::{allocate_index, get_current_parent_index, release_index, with_parent};
use crate::types::ComponentType;
use super::types::{Cleanup, ElementProps};

// =============================================================================
// Element Component
// =============================================================================

/// Create a tagged container component.
///
/// Returns a cleanup function that releases the element and its subtree.
pub fn element(props: ElementProps) -> Cleanup {
    // 1. ALLOCATE INDEX
    let index = allocate_index(props.id.as_deref());

    // 2. CORE SETUP - Type, tag, parent
    core::set_component_type(index, ComponentType::Element);
    core::set_tag(index, props.tag);
    if let Some(parent) = get_current_parent_index() {
        core::set_parent_index(index, Some(parent));
    }

    // 3. RENDER CHILDREN
    if let Some(children) = props.children {
        with_parent(Some(index), || children.render());
    }

    // 4. RETURN CLEANUP
    Box::new(move || release_index(index))
}

// =============================================================================
// Tests
// =============================================================================
