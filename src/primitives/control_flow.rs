//! Control Flow Primitives - Conditional rendering.
//!
//! - [`show`] - Conditional rendering based on reactive conditions
//!
//! # Pattern: EffectScope-based Cleanup
//!
//! 1. Create an EffectScope to manage the lifetime of child effects/components
//! 2. Run rendering logic inside `scope.run()`
//! 3. Register cleanup with `on_scope_dispose()`
//! 4. Return `Box::new(move || scope.stop())` as the Cleanup
//!
//! # Pattern: Parent Context Restoration
//!
//! When components are created inside control flow, the parent context must
//! be correct. `show()` captures the parent index at creation time and
//! restores it before rendering a branch. Ambient context (slot scopes)
//! resolves through the parent chain, so it is restored along with it.
//!
//! Branches render inside a lifecycle frame: a branch that mounts slot
//! outlets registers them as soon as the branch has rendered.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{effect, effect_scope, on_scope_dispose};

use crate::engine::{get_current_parent_index, with_parent};
use crate::pipeline::lifecycle::component;
use crate::primitives::Cleanup;

/// Conditionally render components based on a reactive condition.
///
/// Creates and destroys components when the condition changes. The condition
/// getter establishes a reactive dependency, so the UI automatically updates.
///
/// # Arguments
///
/// * `condition` - Getter that returns boolean (creates reactive dependency)
/// * `then_fn` - Function to render when condition is true (returns cleanup)
/// * `else_fn` - Optional function to render when condition is false
///
/// # Returns
///
/// A cleanup function that destroys the current branch and stops tracking.
///
/// # Example
///
/// ```ignore
/// use spark_slots::{show, text, Cleanup};
/// use spark_signals::signal;
///
/// let is_visible = signal(true);
/// let is_visible_clone = is_visible.clone();
///
/// let cleanup = show(
///     move || is_visible_clone.get(),
///     || text("Visible!"),
///     None::<fn() -> Cleanup>,
/// );
///
/// is_visible.set(false); // "Visible!" destroyed
/// cleanup();
/// ```
pub fn show<ThenF, ElseF, ThenR, ElseR>(
    condition: impl Fn() -> bool + 'static,
    then_fn: ThenF,
    else_fn: Option<ElseF>,
) -> Cleanup
where
    ThenF: Fn() -> ThenR + 'static,
    ElseF: Fn() -> ElseR + 'static,
    ThenR: Into<Cleanup>,
    ElseR: Into<Cleanup>,
{
    // Capture parent index at creation time
    let parent_index = get_current_parent_index();

    // Storage for current cleanup and condition state
    let cleanup: Rc<RefCell<Option<Cleanup>>> = Rc::new(RefCell::new(None));
    let was_true: Rc<Cell<Option<bool>>> = Rc::new(Cell::new(None));

    let scope = effect_scope(false);

    let cleanup_for_update = cleanup.clone();
    let cleanup_for_dispose = cleanup.clone();

    // Update function - runs when condition changes
    let update = move |new_condition: bool| {
        // Skip if condition unchanged
        if was_true.get() == Some(new_condition) {
            return;
        }
        was_true.set(Some(new_condition));

        // Cleanup previous branch
        let previous = cleanup_for_update.borrow_mut().take();
        if let Some(prev_cleanup) = previous {
            prev_cleanup();
        }

        // Render new branch with correct parent context
        let new_cleanup = component(|| {
            with_parent(parent_index, || {
                if new_condition {
                    Some(then_fn().into())
                } else {
                    else_fn.as_ref().map(|f| f().into())
                }
            })
        });

        *cleanup_for_update.borrow_mut() = new_cleanup;
    };

    scope.run(move || {
        // Initial render happens on first effect run
        let _effect_cleanup = effect(move || {
            let current = condition();
            update(current);
        });

        // Cleanup when scope is disposed
        on_scope_dispose(move || {
            let current = cleanup_for_dispose.borrow_mut().take();
            if let Some(cleanup_fn) = current {
                cleanup_fn();
            }
        });
    });

    Box::new(move || {
        scope.stop();
    })
}

// =============================================================================
// Tests
// =============================================================================
