//! Ambient context - values provided at a node, visible to its subtree.
//!
//! A value provided at index `i` is found by any component created while
//! `i` (or one of its descendants) is the current parent. Lookup walks the
//! parent chain upward from the current parent index, so a deferred render
//! that restores its captured parent also sees the right context.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::mem::ManuallyDrop;
use std::rc::Rc;

use super::arrays::core::get_parent_index;
use super::registry::get_current_parent_index;

thread_local! {
    /// Index → (type → value).
    ///
    /// Never dropped at thread exit; values may hold signals.
    static CONTEXTS: ManuallyDrop<RefCell<HashMap<usize, HashMap<TypeId, Rc<dyn Any>>>>> =
        ManuallyDrop::new(RefCell::new(HashMap::new()));
}

/// Provide `value` to the subtree rooted at `index`.
///
/// A later value of the same type at the same index replaces the earlier one.
pub fn provide_context<T: 'static>(index: usize, value: Rc<T>) {
    CONTEXTS.with(|contexts| {
        contexts
            .borrow_mut()
            .entry(index)
            .or_default()
            .insert(TypeId::of::<T>(), value);
    });
}

/// Nearest value of type `T` provided at `index` or one of its ancestors.
pub fn find_context<T: 'static>(index: usize) -> Option<Rc<T>> {
    let mut current = Some(index);
    while let Some(index) = current {
        let found = CONTEXTS.with(|contexts| {
            contexts
                .borrow()
                .get(&index)
                .and_then(|values| values.get(&TypeId::of::<T>()).cloned())
        });
        if let Some(value) = found {
            return value.downcast::<T>().ok();
        }
        current = get_parent_index(index);
    }
    None
}

/// Nearest value of type `T` visible from the current parent context.
pub fn use_context<T: 'static>() -> Option<Rc<T>> {
    get_current_parent_index().and_then(find_context::<T>)
}

/// Drop all values provided at `index`.
pub(crate) fn clear_context(index: usize) {
    CONTEXTS.with(|contexts| {
        contexts.borrow_mut().remove(&index);
    });
}

/// Drop every provided value (for testing).
pub(crate) fn reset_context() {
    CONTEXTS.with(|contexts| contexts.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::core::set_parent_index;
    use crate::engine::{allocate_index, pop_parent_context, push_parent_context, release_index, reset_registry};

    #[derive(Debug, PartialEq)]
    struct Theme(&'static str);

    #[test]
    fn test_context_visible_to_descendants() {
        reset_registry();

        let root = allocate_index(None);
        let child = allocate_index(None);
        set_parent_index(child, Some(root));
        provide_context(root, Rc::new(Theme("dark")));

        push_parent_context(child);
        assert_eq!(use_context::<Theme>().as_deref(), Some(&Theme("dark")));
        pop_parent_context();
    }

    #[test]
    fn test_nearest_context_wins() {
        reset_registry();

        let outer = allocate_index(None);
        let inner = allocate_index(None);
        set_parent_index(inner, Some(outer));
        provide_context(outer, Rc::new(Theme("outer")));
        provide_context(inner, Rc::new(Theme("inner")));

        assert_eq!(find_context::<Theme>(inner).as_deref(), Some(&Theme("inner")));
        assert_eq!(find_context::<Theme>(outer).as_deref(), Some(&Theme("outer")));
    }

    #[test]
    fn test_no_context_outside_provider() {
        reset_registry();

        assert!(use_context::<Theme>().is_none());

        let lonely = allocate_index(None);
        push_parent_context(lonely);
        assert!(use_context::<Theme>().is_none());
        pop_parent_context();
    }

    #[test]
    fn test_release_drops_context() {
        reset_registry();

        let keep = allocate_index(None);
        let provider = allocate_index(None);
        provide_context(provider, Rc::new(Theme("gone")));
        release_index(provider);

        let reused = allocate_index(None);
        assert_eq!(reused, provider);
        assert!(find_context::<Theme>(reused).is_none());
        release_index(keep);
    }
}
