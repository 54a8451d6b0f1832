//! Parallel arrays for node state.
//!
//! All node state lives in these parallel arrays. Each array index
//! corresponds to one node of the view tree.
//!
//! # Array Categories
//!
//! - **core**: Node kind, parent, ordered children, element tag
//! - **text**: Text content of text leaves

pub mod core;
pub mod text;

use self::core as core_arrays;
use self::text as text_arrays;

/// Ensure all arrays have capacity for the given index.
///
/// Called by registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core_arrays::ensure_capacity(index);
    text_arrays::ensure_capacity(index);
}

/// Clear all array values at an index.
///
/// Called by registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core_arrays::clear_at_index(index);
    text_arrays::clear_at_index(index);
}

/// Reset all parallel arrays to release memory.
///
/// Called automatically when all nodes are destroyed.
pub fn reset_all_arrays() {
    core_arrays::reset();
    text_arrays::reset();
}
