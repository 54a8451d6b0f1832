//! Primitives - Component building blocks.
//!
//! This module provides the core primitives:
//! - [`element`] - Tagged container with children
//! - [`text`] - Text display
//! - [`show`] - Conditional rendering
//!
//! # Architecture
//!
//! Components are indices into parallel arrays. Each component:
//! 1. Allocates an index from the registry
//! 2. Attaches itself under the current parent
//! 3. Binds props directly (preserving reactivity!)
//! 4. Returns a cleanup function
//!
//! # Reactivity
//!
//! Props can be:
//! - Static values: `"hello"`
//! - Signals: `my_signal` (stays connected!)
//! - Getters: `PropValue::getter(|| compute())`

mod types;
mod element;
mod text;
mod control_flow;

pub use types::*;
pub use element::element;
pub use text::{text, text_node};
pub use control_flow::show;
