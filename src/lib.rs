//! # spark-slots
//!
//! Named content slots for reactive component trees.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Components are indices into parallel arrays rather than objects. Each
//! node records its kind, its parent and its ordered children; context
//! values hang off nodes and are found by walking up the parent chain.
//!
//! A container decorated with [`with_slots`] renders inside its own slot
//! scope. Outlets anywhere in its children write into that scope after the
//! tree commits, and the readers from [`use_slots`] render what was written:
//! ```text
//! with_slots → SlotScope(registry) → container → use_slots readers
//!                                      └─ children → SlotOutlet writes
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Node, SlotContent, ComponentType)
//! - [`engine`] - Component registry, parallel arrays, node context
//! - [`pipeline`] - Component frames, mount effects, mounting
//! - [`primitives`] - element, text, show
//! - [`slots`] - Slot scopes, outlets, decorator and hook
//! - [`error`] - Name list validation errors
//!
//! ## Example
//!
//! ```ignore
//! use spark_slots::*;
//!
//! let layout = with_slots(
//!     |children: Option<Node>| {
//!         let slots = use_slots(["header", "content"]);
//!         element(ElementProps {
//!             tag: "layout".into(),
//!             children: Some(Node::new(move || {
//!                 let _header = slots["Header"].render(text_node("default header"));
//!                 let _content = slots["Content"].render(Fallback::none());
//!                 if let Some(children) = &children {
//!                     children.render();
//!                 }
//!             })),
//!             ..Default::default()
//!         })
//!     },
//!     ["header", "content"],
//! );
//!
//! let content = layout["Content"].clone();
//! let handle = mount(move || {
//!     layout.render(Some(Node::new(move || {
//!         let _cleanup = content.render(text_node("hello"));
//!     })))
//! });
//! assert_eq!(handle.text(), vec!["default header", "hello"]);
//! ```

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod primitives;
pub mod slots;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::SlotError;

pub use engine::{
    allocate_index, find_context, get_allocated_count, get_allocated_indices,
    get_current_parent_index, get_id, get_index, is_allocated, on_destroy, pop_parent_context,
    provide_context, push_parent_context, release_children, release_index, reset_registry,
    use_context, with_parent,
};

pub use pipeline::{
    collect_text, component, is_rendering, mount, on_mount, render_tree, unmount, MountHandle,
};

pub use primitives::{
    element, show, text, text_node, Cleanup, ElementProps, PropValue, TextProps,
};

pub use slots::{
    pascal_case, slot_outlet, slot_scope, try_with_slots, use_slot_context, use_slots,
    with_slots, AccessorMap, Fallback, SlotContext, SlotNames, SlotOutletProps, SlotReader,
    SlotReaders, SlotRegistry, SlotScopeProps, SlotWriter, SlotWriters, Slottable,
};
