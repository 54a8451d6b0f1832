//! Slot factory - decorating a container with slot write-accessors.
//!
//! [`with_slots`] turns a plain component into a [`Slottable`]. Rendering a
//! slottable opens a fresh slot scope around exactly one rendering of the
//! base component, so every instance owns its registry. The slottable also
//! carries the write side: a generic [`Slottable::slot`] plus one
//! [`SlotWriter`] per declared name, indexed by PascalCase accessor.
//!
//! # Example
//!
//! ```ignore
//! use spark_slots::{element, text_node, use_slots, with_slots, ElementProps, Fallback, Node};
//!
//! let layout = with_slots(
//!     |children: Option<Node>| {
//!         let slots = use_slots(["header", "content"]);
//!         element(ElementProps {
//!             tag: "layout".into(),
//!             children: Some(Node::new(move || {
//!                 slots["Header"].render(text_node("default header"));
//!                 slots["Content"].render(Fallback::none());
//!                 if let Some(children) = &children {
//!                     children.render();
//!                 }
//!             })),
//!             ..Default::default()
//!         })
//!     },
//!     ["header", "content"],
//! );
//!
//! let writer = layout["Content"].clone();
//! layout.render(Some(Node::new(move || {
//!     writer.render(text_node("hello"));
//! })));
//! ```

use std::ops::Index;
use std::rc::Rc;

use crate::error::SlotError;
use crate::pipeline::lifecycle::component;
use crate::primitives::{Cleanup, PropValue};
use crate::types::SlotContent;
use super::accessor_map::AccessorMap;
use super::names::SlotNames;
use super::outlet::{slot_outlet, SlotOutletProps};
use super::scope::scoped;

/// Write-accessors of a [`Slottable`], keyed by accessor name.
pub type SlotWriters = AccessorMap<SlotWriter>;

// =============================================================================
// Slot Writer
// =============================================================================

/// Write-accessor for one declared slot.
#[derive(Clone, Debug)]
pub struct SlotWriter {
    name: String,
    accessor: String,
}

impl SlotWriter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accessor(&self) -> &str {
        &self.accessor
    }

    /// Mount an outlet writing `content` into this slot.
    pub fn render(&self, content: impl Into<PropValue<SlotContent>>) -> Cleanup {
        slot_outlet(SlotOutletProps {
            name: self.name.clone(),
            content: content.into(),
        })
    }
}

// =============================================================================
// Slottable
// =============================================================================

/// A component decorated with slots.
///
/// Takes the same props as the base component.
pub struct Slottable<P> {
    component: Rc<dyn Fn(P) -> Cleanup>,
    names: SlotNames,
    writers: Rc<SlotWriters>,
}

impl<P> Clone for Slottable<P> {
    fn clone(&self) -> Self {
        Self {
            component: self.component.clone(),
            names: self.names.clone(),
            writers: self.writers.clone(),
        }
    }
}

impl<P: 'static> Slottable<P> {
    /// Render the base component inside a new slot scope.
    pub fn render(&self, props: P) -> Cleanup {
        let base = self.component.clone();
        scoped(None, move || component(|| base(props)))
    }

    /// Mount an outlet writing `content` into slot `name`.
    ///
    /// Names the container did not declare are still written, but no
    /// reader will ever resolve them.
    pub fn slot(&self, name: &str, content: impl Into<PropValue<SlotContent>>) -> Cleanup {
        if !self.names.contains(name) {
            log::warn!(
                "slot '{}' is not declared (declared: {:?})",
                name,
                self.names.iter().collect::<Vec<_>>()
            );
        }
        slot_outlet(SlotOutletProps {
            name: name.to_string(),
            content: content.into(),
        })
    }

    /// Writer for the slot whose accessor name is `accessor`.
    pub fn writer(&self, accessor: &str) -> Option<&SlotWriter> {
        self.writers.get(accessor)
    }

    pub fn writers(&self) -> &SlotWriters {
        &self.writers
    }

    /// Declared slot names, in order.
    pub fn names(&self) -> &SlotNames {
        &self.names
    }
}

impl<P> Index<&str> for Slottable<P> {
    type Output = SlotWriter;

    /// # Panics
    ///
    /// Panics if no declared slot maps to `accessor`.
    fn index(&self, accessor: &str) -> &SlotWriter {
        &self.writers[accessor]
    }
}

// =============================================================================
// Decorators
// =============================================================================

/// Decorate `component` with the slots in `names`.
///
/// A name list that cannot produce distinct accessors is logged and used
/// anyway; see [`try_with_slots`] for the strict variant.
pub fn with_slots<P, F>(component: F, names: impl Into<SlotNames>) -> Slottable<P>
where
    F: Fn(P) -> Cleanup + 'static,
{
    let names = names.into();
    if let Err(err) = names.validate() {
        log::warn!("with_slots: {}", err);
    }
    build(component, names)
}

/// Like [`with_slots`], but rejects an invalid name list.
pub fn try_with_slots<P, F>(component: F, names: impl Into<SlotNames>) -> Result<Slottable<P>, SlotError>
where
    F: Fn(P) -> Cleanup + 'static,
{
    let names = names.into();
    names.validate()?;
    Ok(build(component, names))
}

fn build<P, F>(component: F, names: SlotNames) -> Slottable<P>
where
    F: Fn(P) -> Cleanup + 'static,
{
    let writers = AccessorMap::from_names(&names, |name, accessor| SlotWriter {
        name: name.to_string(),
        accessor,
    });
    Slottable {
        component: Rc::new(component),
        names,
        writers: Rc::new(writers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reset_registry;
    use crate::pipeline::mount::mount;
    use crate::primitives::text_node;
    use crate::slots::accessors::{use_slots, Fallback};
    use crate::types::Node;

    fn card() -> Slottable<Option<Node>> {
        with_slots(
            |children: Option<Node>| {
                let slots = use_slots(["title", "body"]);
                let title = slots["Title"].render(text_node("untitled"));
                let body = slots["Body"].render(Fallback::none());
                if let Some(children) = children {
                    children.render();
                }
                Box::new(move || {
                    title();
                    body();
                }) as Cleanup
            },
            ["title", "body"],
        )
    }

    #[test]
    fn test_writers_follow_declaration() {
        let card = card();

        assert_eq!(card.names().len(), 2);
        assert_eq!(card["Title"].name(), "title");
        assert_eq!(card.writer("Body").map(SlotWriter::name), Some("body"));
        assert!(card.writer("Footer").is_none());
        assert_eq!(card.writers().accessors().collect::<Vec<_>>(), vec!["Title", "Body"]);
    }

    #[test]
    fn test_writer_fills_slot() {
        reset_registry();

        let card = card();
        let body = card["Body"].clone();
        let handle = mount(move || {
            card.render(Some(Node::new(move || {
                let _cleanup = body.render(text_node("details"));
            })))
        });

        assert_eq!(handle.text(), vec!["untitled", "details"]);
    }

    #[test]
    fn test_generic_slot_writes_declared_name() {
        reset_registry();

        let card = card();
        let writer = card.clone();
        let handle = mount(move || {
            card.render(Some(Node::new(move || {
                let _cleanup = writer.slot("title", text_node("Hello"));
            })))
        });

        assert_eq!(handle.text(), vec!["Hello"]);
    }

    #[test]
    fn test_generic_slot_accepts_undeclared_name() {
        reset_registry();

        let card = card();
        let writer = card.clone();
        let handle = mount(move || {
            card.render(Some(Node::new(move || {
                let _cleanup = writer.slot("sidebar", text_node("ignored"));
            })))
        });

        assert_eq!(handle.text(), vec!["untitled"]);
    }

    #[test]
    fn test_try_with_slots_rejects_collision() {
        let result = try_with_slots(|_: ()| Box::new(|| {}) as Cleanup, ["nav-bar", "nav_bar"]);
        assert!(matches!(result, Err(SlotError::CasingCollision { .. })));
    }

    #[test]
    fn test_with_slots_keeps_last_on_collision() {
        let slottable = with_slots(|_: ()| Box::new(|| {}) as Cleanup, ["nav-bar", "nav_bar"]);
        assert_eq!(slottable["NavBar"].name(), "nav_bar");
        assert_eq!(slottable.writers().len(), 1);
    }
}
