//! Slot Scope - one registry per container instance.
//!
//! A scope is a transparent fragment node that provides a fresh
//! [`SlotRegistry`] to everything rendered beneath it. Descendants reach
//! the nearest registry through [`use_slot_context`] without any prop
//! threading. Releasing the scope node drops the registry.

use std::collections::HashMap;
use std::rc::Rc;

use crate::engine::arrays::core;
use crate::engine::{
    allocate_index, get_current_parent_index, on_destroy, provide_context, release_index,
    use_context, with_parent,
};
use crate::pipeline::lifecycle::component;
use crate::primitives::Cleanup;
use crate::types::{ComponentType, Node, SlotContent};
use super::registry::SlotRegistry;

// =============================================================================
// Slot Context
// =============================================================================

/// Handle to the nearest enclosing slot registry.
///
/// Outside any scope every operation degrades: nothing is registered,
/// nothing is found, nothing panics.
#[derive(Clone, Default)]
pub struct SlotContext {
    registry: Option<Rc<SlotRegistry>>,
}

impl SlotContext {
    /// Context visible from the current parent.
    pub fn current() -> Self {
        Self {
            registry: use_context::<SlotRegistry>(),
        }
    }

    /// Whether a scope encloses this context.
    pub fn is_scoped(&self) -> bool {
        self.registry.is_some()
    }

    pub fn registry(&self) -> Option<&Rc<SlotRegistry>> {
        self.registry.as_ref()
    }

    /// True iff `name` has been written in this scope. False outside a scope.
    pub fn has_slot(&self, name: &str) -> bool {
        self.registry.as_ref().is_some_and(|registry| registry.has(name))
    }

    /// Replace the content stored under `name`. No-op outside a scope.
    pub fn register_slot(&self, name: &str, content: impl Into<SlotContent>) {
        if let Some(registry) = &self.registry {
            registry.register(name, content.into());
        }
    }

    /// Latest content for `name`. `None` outside a scope or when unwritten.
    pub fn get_slot(&self, name: &str) -> Option<SlotContent> {
        self.registry.as_ref().and_then(|registry| registry.get(name))
    }

    /// All stored entries. Empty outside a scope.
    pub fn slots(&self) -> HashMap<String, SlotContent> {
        self.registry
            .as_ref()
            .map(|registry| registry.snapshot())
            .unwrap_or_default()
    }
}

/// Slot context visible from the current parent.
pub fn use_slot_context() -> SlotContext {
    SlotContext::current()
}

// =============================================================================
// Slot Scope Component
// =============================================================================

/// Properties for [`slot_scope`].
#[derive(Default)]
pub struct SlotScopeProps {
    /// Optional node ID for lookup.
    pub id: Option<String>,
    /// Subtree that shares the scope's registry.
    pub children: Option<Node>,
}

/// Wrap a subtree in a new slot scope.
///
/// # Example
///
/// ```ignore
/// use spark_slots::{slot_scope, SlotScopeProps, Node};
///
/// slot_scope(SlotScopeProps {
///     children: Some(Node::new(|| {
///         // outlets and readers here share one registry
///     })),
///     ..Default::default()
/// });
/// ```
pub fn slot_scope(props: SlotScopeProps) -> Cleanup {
    let children = props.children;
    scoped(props.id.as_deref(), move || {
        if let Some(children) = children {
            children.render();
        }
        Box::new(|| {})
    })
}

/// Open a scope node, render `render` inside it, and tie the cleanup
/// `render` returns to the scope's lifetime.
pub(crate) fn scoped(id: Option<&str>, render: impl FnOnce() -> Cleanup) -> Cleanup {
    component(|| {
        let index = allocate_index(id);
        core::set_component_type(index, ComponentType::Fragment);
        if let Some(parent) = get_current_parent_index() {
            core::set_parent_index(index, Some(parent));
        }

        provide_context(index, Rc::new(SlotRegistry::new()));
        log::trace!("slot scope opened at {}", index);

        let inner = with_parent(Some(index), render);
        on_destroy(index, move || {
            inner();
            log::trace!("slot scope at {} disposed", index);
        });

        Box::new(move || release_index(index)) as Cleanup
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{get_allocated_count, push_parent_context, pop_parent_context, reset_registry};
    use std::cell::RefCell;

    fn capture_context(into: &Rc<RefCell<Option<SlotContext>>>) -> Node {
        let into = into.clone();
        Node::new(move || {
            *into.borrow_mut() = Some(use_slot_context());
        })
    }

    #[test]
    fn test_defaults_outside_scope() {
        reset_registry();

        let context = use_slot_context();
        context.register_slot("header", Node::new(|| {}));

        assert!(!context.is_scoped());
        assert!(!context.has_slot("header"));
        assert!(context.get_slot("header").is_none());
        assert!(context.slots().is_empty());
    }

    #[test]
    fn test_scope_provides_registry() {
        reset_registry();

        let captured = Rc::new(RefCell::new(None));
        let cleanup = slot_scope(SlotScopeProps {
            children: Some(capture_context(&captured)),
            ..Default::default()
        });

        let context = captured.borrow().clone().unwrap();
        assert!(context.is_scoped());

        context.register_slot("header", Node::new(|| {}));
        assert!(context.has_slot("header"));
        assert!(context.get_slot("header").is_some());
        assert_eq!(context.slots().len(), 1);
        cleanup();
    }

    #[test]
    fn test_sibling_scopes_are_isolated() {
        reset_registry();

        let first = Rc::new(RefCell::new(None));
        let second = Rc::new(RefCell::new(None));
        let a = slot_scope(SlotScopeProps {
            children: Some(capture_context(&first)),
            ..Default::default()
        });
        let b = slot_scope(SlotScopeProps {
            children: Some(capture_context(&second)),
            ..Default::default()
        });

        let first = first.borrow().clone().unwrap();
        let second = second.borrow().clone().unwrap();
        first.register_slot("header", Node::new(|| {}));

        assert!(first.has_slot("header"));
        assert!(!second.has_slot("header"));
        a();
        b();
    }

    #[test]
    fn test_nested_scope_shadows_outer() {
        reset_registry();

        let outer = Rc::new(RefCell::new(None));
        let inner = Rc::new(RefCell::new(None));
        let inner_capture = capture_context(&inner);
        let outer_capture = capture_context(&outer);

        let cleanup = slot_scope(SlotScopeProps {
            children: Some(Node::new(move || {
                outer_capture.render();
                let _inner = slot_scope(SlotScopeProps {
                    children: Some(inner_capture.clone()),
                    ..Default::default()
                });
            })),
            ..Default::default()
        });

        let outer = outer.borrow().clone().unwrap();
        let inner = inner.borrow().clone().unwrap();
        inner.register_slot("content", Node::new(|| {}));

        assert!(inner.has_slot("content"));
        assert!(!outer.has_slot("content"));
        cleanup();
    }

    #[test]
    fn test_cleanup_releases_scope() {
        reset_registry();

        let root = allocate_index(None);
        push_parent_context(root);
        let cleanup = slot_scope(SlotScopeProps::default());
        pop_parent_context();

        assert_eq!(get_allocated_count(), 2);
        cleanup();
        assert_eq!(get_allocated_count(), 1);
    }
}
