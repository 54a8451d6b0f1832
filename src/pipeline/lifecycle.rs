//! Component lifecycle - render frames and post-mount effects.
//!
//! Rendering a component is synchronous: it creates nodes under the current
//! parent. Work that must see the committed tree (slot registration, the
//! slot settle gate) is deferred with [`on_mount`] and flushed once the
//! outermost [`component`] frame has finished rendering.
//!
//! # Ordering
//!
//! Mount effects run in post-order: every effect queued by a child component
//! runs before the effects its parent queued itself, regardless of whether the
//! parent queued them before or after rendering its children.
//!
//! ```text
//! component(layout)            queues: settle
//!   component(outlet header)   queues: register header
//!   component(outlet footer)   queues: register footer
//!
//! flush order: register header, register footer, settle
//! ```

use std::cell::RefCell;

type MountEffect = Box<dyn FnOnce()>;

#[derive(Default)]
struct Frame {
    /// Effects queued by the component itself.
    own: Vec<MountEffect>,
    /// Effects handed up by finished child components, already in order.
    children: Vec<MountEffect>,
}

thread_local! {
    static FRAMES: RefCell<Vec<Frame>> = const { RefCell::new(Vec::new()) };
}

/// Render a component inside a lifecycle frame.
///
/// Mount effects queued while `render` runs are handed to the enclosing frame
/// or, when this is the outermost frame, run before returning.
pub fn component<R>(render: impl FnOnce() -> R) -> R {
    FRAMES.with(|frames| frames.borrow_mut().push(Frame::default()));

    let result = render();

    let frame = FRAMES.with(|frames| frames.borrow_mut().pop()).unwrap_or_default();
    let mut effects = frame.children;
    effects.extend(frame.own);

    let to_flush = FRAMES.with(|frames| match frames.borrow_mut().last_mut() {
        Some(parent) => {
            parent.children.extend(effects);
            None
        }
        None => Some(effects),
    });

    if let Some(effects) = to_flush {
        for effect in effects {
            effect();
        }
    }

    result
}

/// Queue `effect` to run after the current component tree has rendered.
///
/// With no component frame open the tree is already committed, so the
/// effect runs immediately.
pub fn on_mount(effect: impl FnOnce() + 'static) {
    let pending = FRAMES.with(|frames| match frames.borrow_mut().last_mut() {
        Some(frame) => {
            frame.own.push(Box::new(effect));
            None
        }
        None => Some(effect),
    });

    if let Some(effect) = pending {
        effect();
    }
}

/// Whether a component frame is currently rendering.
pub fn is_rendering() -> bool {
    FRAMES.with(|frames| !frames.borrow().is_empty())
}
