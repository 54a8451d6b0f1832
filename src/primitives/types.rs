//! Primitive types - Props and cleanup.
//!
//! These types define the interface for component props.
//! Props support static values, signals, and getters for reactivity.

use std::rc::Rc;

use spark_signals::Signal;

use crate::types::{Node, SlotContent};

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by components.
///
/// Call this to unmount the component and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// This enables reactive props while maintaining type safety.
/// Reading through [`PropValue::get`] inside an effect tracks the signal
/// (or whatever the getter reads), so the effect re-runs on change.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }

    /// Wrap a getter closure.
    pub fn getter(f: impl Fn() -> T + 'static) -> Self {
        PropValue::Getter(Rc::new(f))
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

// Slot content is usually written as a node
impl From<Node> for PropValue<SlotContent> {
    fn from(node: Node) -> Self {
        PropValue::Static(SlotContent::Node(node))
    }
}

// =============================================================================
// Element Props
// =============================================================================

/// Properties for the element container.
///
/// # Example
///
/// ```ignore
/// use spark_slots::{element, text, ElementProps, Node};
///
/// let cleanup = element(ElementProps {
///     tag: "header".into(),
///     children: Some(Node::new(|| {
///         text("Title");
///     })),
///     ..Default::default()
/// });
/// ```
#[derive(Default)]
pub struct ElementProps {
    /// Optional node ID for lookup.
    pub id: Option<String>,
    /// Tag shown in the rendered markup.
    pub tag: String,
    /// Children rendered with this element as parent.
    pub children: Option<Node>,
}

// =============================================================================
// Text Props
// =============================================================================

/// Properties for the text leaf.
#[derive(Default)]
pub struct TextProps {
    /// Optional node ID for lookup.
    pub id: Option<String>,
    /// Text to display (static, signal, or getter).
    pub content: PropValue<String>,
}

impl From<&str> for TextProps {
    fn from(content: &str) -> Self {
        TextProps {
            content: content.into(),
            ..Default::default()
        }
    }
}

impl From<String> for TextProps {
    fn from(content: String) -> Self {
        TextProps {
            content: content.into(),
            ..Default::default()
        }
    }
}

impl From<PropValue<String>> for TextProps {
    fn from(content: PropValue<String>) -> Self {
        TextProps {
            content,
            ..Default::default()
        }
    }
}

impl From<Signal<String>> for TextProps {
    fn from(content: Signal<String>) -> Self {
        TextProps {
            content: content.into(),
            ..Default::default()
        }
    }
}
