//! Mount API - Application lifecycle and tree snapshots.
//!
//! This module provides the entry point for mounting an application into a
//! fresh root node, and read-only views of the rendered tree.
//!
//! # Example
//!
//! ```ignore
//! use spark_slots::{mount, text};
//!
//! let handle = mount(|| text("hello"));
//! assert_eq!(handle.text(), vec!["hello"]);
//!
//! // Clean up
//! handle.unmount();
//! ```

use crate::engine::arrays::{core, text};
use crate::engine::{allocate_index, is_allocated, release_index, with_parent};
use crate::primitives::Cleanup;
use crate::types::ComponentType;
use super::lifecycle::component;

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by mount() that allows inspecting and unmounting.
pub struct MountHandle {
    root: usize,
    cleanup: Option<Cleanup>,
}

impl MountHandle {
    /// Index of the root node.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Text leaves under the root, in document order.
    pub fn text(&self) -> Vec<String> {
        collect_text(self.root)
    }

    /// Compact markup of the rendered tree.
    pub fn render(&self) -> String {
        render_tree(self.root)
    }

    /// Run the app cleanup and release the whole tree.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
        if is_allocated(self.root) {
            release_index(self.root);
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount an application.
///
/// Creates a root node, renders `app` under it inside a component frame and
/// flushes every mount effect the render queued. When this returns, slot
/// outlets have registered and slot readers have settled.
pub fn mount<F, R>(app: F) -> MountHandle
where
    F: FnOnce() -> R,
    R: Into<Cleanup>,
{
    let root = allocate_index(None);
    core::set_component_type(root, ComponentType::Root);

    let cleanup = component(|| with_parent(Some(root), app)).into();

    log::trace!("mounted root {}", root);

    MountHandle {
        root,
        cleanup: Some(cleanup),
    }
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

// =============================================================================
// Snapshots
// =============================================================================

/// Text leaves under `index`, in document order.
pub fn collect_text(index: usize) -> Vec<String> {
    let mut out = Vec::new();
    collect_text_into(index, &mut out);
    out
}

fn collect_text_into(index: usize, out: &mut Vec<String>) {
    if core::get_component_type(index) == ComponentType::Text {
        out.push(text::get_text_content(index));
        return;
    }
    for child in core::get_children(index) {
        collect_text_into(child, out);
    }
}

/// Compact markup for the subtree at `index`.
///
/// Elements render as `<tag>...</tag>`, text as its content; roots and
/// fragments are transparent.
pub fn render_tree(index: usize) -> String {
    let mut out = String::new();
    render_into(index, &mut out);
    out
}

fn render_into(index: usize, out: &mut String) {
    match core::get_component_type(index) {
        ComponentType::Text => out.push_str(&text::get_text_content(index)),
        ComponentType::Element => {
            let tag = core::get_tag(index).unwrap_or_default();
            out.push('<');
            out.push_str(&tag);
            out.push('>');
            for child in core::get_children(index) {
                render_into(child, out);
            }
            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
        ComponentType::Root | ComponentType::Fragment | ComponentType::None => {
            for child in core::get_children(index) {
                render_into(child, out);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
