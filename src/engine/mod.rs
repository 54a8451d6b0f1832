//! View Engine - Node registry, parallel arrays and ambient context.
//!
//! The engine manages the core data structures:
//! - Registry: Index allocation, ID mapping, parent context, destroy callbacks
//! - Arrays: Parallel per-index storage for node state
//! - Context: Values provided at a node and resolved by its descendants
//!
//! # Architecture
//!
//! Nodes are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: Root     (parent=None, children=[1])
//! Index 1: Fragment (parent=0, children=[2, 3])   <- slot scope
//! Index 2: Element  (parent=1, tag="header")
//! Index 3: Text     (parent=1, content="hello")
//! ```

mod registry;
pub mod arrays;
pub mod context;

pub use registry::*;
pub use context::{find_context, provide_context, use_context};
