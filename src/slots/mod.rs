//! Slots - named content regions for container components.
//!
//! A container declares slot names. Its users fill them from anywhere in the
//! container's children, and the container renders each slot where it
//! chooses, falling back to default children for slots nobody filled.
//!
//! # Pieces
//!
//! - [`slot_scope`] - one [`SlotRegistry`] per container instance
//! - [`slot_outlet`] - writes content into the nearest scope after mount
//! - [`with_slots`] - decorates a component: scope + write-accessors
//! - [`use_slots`] - read-accessors with a shared settle gate
//! - [`use_slot_context`] - direct access to the nearest registry
//!
//! # Flow
//!
//! ```text
//! render:  scope → container (use_slots: readers unsettled)
//!                    └─ children → outlets (nothing written yet)
//! mount:   outlets register → container settles → readers render
//! ```

mod accessor_map;
mod accessors;
mod factory;
mod names;
mod outlet;
mod registry;
mod scope;

pub use accessor_map::AccessorMap;
pub use accessors::{use_slots, Fallback, SlotReader, SlotReaders};
pub use factory::{try_with_slots, with_slots, SlotWriter, SlotWriters, Slottable};
pub use names::{pascal_case, SlotNames};
pub use outlet::{slot_outlet, SlotOutletProps};
pub use registry::SlotRegistry;
pub use scope::{slot_scope, use_slot_context, SlotContext, SlotScopeProps};
