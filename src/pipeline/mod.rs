//! Render Pipeline
//!
//! Connects component rendering to the commit/effect cycle.
//!
//! ## Phases
//!
//! 1. **render** - components run synchronously inside [`component`] frames,
//!    creating nodes under the current parent
//! 2. **commit** - the outermost frame finishes; the tree is complete
//! 3. **mount effects** - effects queued with [`on_mount`] run in post-order
//!
//! Signals changed by mount effects re-run the effects that read them, which
//! is how slot writes reach slot readers.

pub mod lifecycle;
pub mod mount;

// Re-exports
pub use lifecycle::{component, is_rendering, on_mount};
pub use mount::{collect_text, mount, render_tree, unmount, MountHandle};
