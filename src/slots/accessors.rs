//! Slot readers - the resolution hook.
//!
//! [`use_slots`] hands a container one reader per declared slot. A reader
//! renders whatever the scope's registry holds for its slot, or its own
//! fallback children when nothing usable is there.
//!
//! # Settle gate
//!
//! Outlets write only after the tree commits, so a reader that resolved
//! during render would always see an empty registry. All readers of one
//! `use_slots` call therefore start **unsettled** and render nothing. The
//! hook queues a mount effect that flips them to **settled**; mount effects
//! run children first, so by then every outlet inside the container has
//! registered. Settled is permanent.

use spark_signals::{effect, effect_scope, signal, Signal};

use crate::engine::arrays::core;
use crate::engine::{
    allocate_index, get_current_parent_index, on_destroy, release_children, release_index,
    with_parent,
};
use crate::pipeline::lifecycle::{component, on_mount};
use crate::primitives::{Cleanup, PropValue};
use crate::types::{ComponentType, Node};
use super::accessor_map::AccessorMap;
use super::names::SlotNames;
use super::scope::{use_slot_context, SlotContext};

/// Read-accessors returned by [`use_slots`], keyed by accessor name.
pub type SlotReaders = AccessorMap<SlotReader>;

// =============================================================================
// Fallback
// =============================================================================

/// Children a reader renders when its slot has no usable content.
#[derive(Clone, Default)]
pub struct Fallback(Option<PropValue<Node>>);

impl Fallback {
    pub fn none() -> Self {
        Self(None)
    }

    fn get(&self) -> Option<Node> {
        self.0.as_ref().map(PropValue::get)
    }
}

impl From<Node> for Fallback {
    fn from(node: Node) -> Self {
        Self(Some(PropValue::Static(node)))
    }
}

impl From<Option<Node>> for Fallback {
    fn from(node: Option<Node>) -> Self {
        Self(node.map(PropValue::Static))
    }
}

impl From<PropValue<Node>> for Fallback {
    fn from(node: PropValue<Node>) -> Self {
        Self(Some(node))
    }
}

impl From<Signal<Node>> for Fallback {
    fn from(node: Signal<Node>) -> Self {
        Self(Some(PropValue::Signal(node)))
    }
}

// =============================================================================
// Slot Reader
// =============================================================================

/// Read-accessor for one slot.
#[derive(Clone)]
pub struct SlotReader {
    name: String,
    accessor: String,
    context: SlotContext,
    settled: Signal<bool>,
}

impl SlotReader {
    /// Slot name this reader resolves.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accessor name (`"Header"` for slot `"header"`).
    pub fn accessor(&self) -> &str {
        &self.accessor
    }

    /// Whether the hook's mount effect has run (reactive).
    pub fn is_settled(&self) -> bool {
        self.settled.get()
    }

    /// Render the slot's content, or `children` when it has none.
    pub fn render(&self, children: impl Into<Fallback>) -> Cleanup {
        self.render_with(PropValue::Static(()), children)
    }

    /// Render the slot with render-site `props`.
    ///
    /// Render-prop content is called with the current props; node content
    /// ignores them. Empty, missing, or mismatched content renders
    /// `children` instead. Re-renders when the slot is rewritten or when
    /// `props` or `children` change.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Clone, PartialEq)]
    /// struct Counter { count: i32 }
    ///
    /// let slots = use_slots(["value"]);
    /// slots["Value"].render_with(PropValue::Static(Counter { count: 5 }), text_node("none"));
    /// ```
    pub fn render_with<P>(&self, props: PropValue<P>, children: impl Into<Fallback>) -> Cleanup
    where
        P: Clone + PartialEq + 'static,
    {
        let fallback = children.into();
        let reader = self.clone();

        component(move || {
            let index = allocate_index(None);
            core::set_component_type(index, ComponentType::Fragment);
            if let Some(parent) = get_current_parent_index() {
                core::set_parent_index(index, Some(parent));
            }

            // Attached to the running effect, if any: a re-render of an
            // enclosing reader disposes it
            let scope = effect_scope(false);
            scope.run(move || {
                let _effect = effect(move || {
                    release_children(index);
                    if !reader.settled.get() {
                        return;
                    }

                    let node = reader.resolve(&props.get()).or_else(|| fallback.get());
                    log::trace!(
                        "slot reader '{}' rendered {}",
                        reader.name,
                        if node.is_some() { "content" } else { "nothing" }
                    );
                    if let Some(node) = node {
                        component(|| with_parent(Some(index), || node.render()));
                    }
                });
            });
            on_destroy(index, move || scope.stop());

            Box::new(move || release_index(index)) as Cleanup
        })
    }

    /// Registered content for this slot, resolved against `props`.
    fn resolve<P: 'static>(&self, props: &P) -> Option<Node> {
        let content = self.context.get_slot(&self.name)?;
        match content.resolve(props) {
            Ok(node) => node,
            Err(()) => {
                log::warn!(
                    "slot '{}' holds render-prop content for a different props type than {}",
                    self.name,
                    std::any::type_name::<P>()
                );
                None
            }
        }
    }
}

// =============================================================================
// Hook
// =============================================================================

/// One reader per slot name, sharing the nearest scope and one settle gate.
///
/// Call from inside the component decorated with
/// [`with_slots`](super::with_slots), passing the same names.
pub fn use_slots(names: impl Into<SlotNames>) -> SlotReaders {
    let names = names.into();
    let context = use_slot_context();
    let settled = signal(false);

    let settle = settled.clone();
    on_mount(move || {
        log::trace!("slot readers settled");
        settle.set(true);
    });

    AccessorMap::from_names(&names, |name, accessor| SlotReader {
        name: name.to_string(),
        accessor,
        context: context.clone(),
        settled: settled.clone(),
    })
}
