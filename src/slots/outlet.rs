//! Slot Outlet - writes content into the enclosing slot scope.
//!
//! An outlet renders nothing. Once the tree has committed, it registers its
//! content under its name, and registers again whenever the content prop
//! changes identity. Without an enclosing scope it is inert.

use spark_signals::{effect, effect_scope};

use crate::engine::arrays::core;
use crate::engine::{
    allocate_index, get_current_parent_index, get_id, on_destroy, release_index,
};
use crate::pipeline::lifecycle::{component, on_mount};
use crate::primitives::{Cleanup, PropValue};
use crate::types::{ComponentType, SlotContent};
use super::scope::SlotContext;

/// Properties for [`slot_outlet`].
#[derive(Default)]
pub struct SlotOutletProps {
    /// Slot to write.
    pub name: String,
    /// Content to store (static, signal, or getter).
    pub content: PropValue<SlotContent>,
}

/// Write `content` into slot `name` of the nearest slot scope.
///
/// # Example
///
/// ```ignore
/// use spark_slots::{slot_outlet, text_node, SlotOutletProps};
///
/// slot_outlet(SlotOutletProps {
///     name: "header".into(),
///     content: text_node("Title").into(),
/// });
/// ```
pub fn slot_outlet(props: SlotOutletProps) -> Cleanup {
    component(|| {
        let index = allocate_index(None);
        core::set_component_type(index, ComponentType::Fragment);
        if let Some(parent) = get_current_parent_index() {
            core::set_parent_index(index, Some(parent));
        }

        let id = get_id(index);
        let context = SlotContext::current();
        let SlotOutletProps { name, content } = props;

        on_mount(move || {
            // Released before the tree committed
            if id.is_none() || get_id(index) != id {
                return;
            }
            let Some(registry) = context.registry().cloned() else {
                log::trace!("slot outlet '{}' has no enclosing scope", name);
                return;
            };

            // Attached to the running effect, if any: a re-render of an
            // enclosing reader disposes it
            let scope = effect_scope(false);
            scope.run(move || {
                // Identical content is skipped by the registry
                let _effect = effect(move || {
                    registry.register(&name, content.get());
                });
            });
            on_destroy(index, move || scope.stop());
        });

        Box::new(move || release_index(index)) as Cleanup
    })
}
