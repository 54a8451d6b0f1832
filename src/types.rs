//! Core types for spark-slots.
//!
//! These types define the foundation that everything builds on:
//! what a node in the view tree is, what a renderable chunk of UI is,
//! and what a slot can hold.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

// =============================================================================
// Component Type
// =============================================================================

/// Kind of node stored at an index of the view tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ComponentType {
    #[default]
    None = 0,
    /// Root created by `mount()`.
    Root = 1,
    /// Tagged container with children.
    Element = 2,
    /// Text leaf.
    Text = 3,
    /// Transparent grouping node (scopes, outlets, slot readers).
    Fragment = 4,
}

// =============================================================================
// Node - a renderable chunk of UI
// =============================================================================

/// A renderable chunk of UI.
///
/// A node is a closure that creates components under the current parent
/// context. It can be rendered any number of times, which is what lets a
/// slot reader re-render the same registered content after every change.
///
/// Equality is identity: two nodes are equal only if they share the same
/// closure allocation. Cloning keeps the identity.
///
/// # Example
///
/// ```ignore
/// use spark_slots::{Node, text};
///
/// let greeting = Node::new(|| {
///     text("hello");
/// });
/// ```
#[derive(Clone)]
pub struct Node(Rc<dyn Fn()>);

impl Node {
    /// Wrap a render closure.
    pub fn new(render: impl Fn() + 'static) -> Self {
        Self(Rc::new(render))
    }

    /// Render under the current parent context.
    pub fn render(&self) {
        (self.0)()
    }

    /// Whether two nodes share the same closure.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

// =============================================================================
// Render props
// =============================================================================

/// Render-prop function: builds a node from the props given at the
/// reader's render site. Returning `None` falls back to the reader's
/// default children.
pub struct RenderFn<P>(Rc<dyn Fn(&P) -> Option<Node>>);

impl<P: 'static> RenderFn<P> {
    pub fn new(render: impl Fn(&P) -> Option<Node> + 'static) -> Self {
        Self(Rc::new(render))
    }

    pub fn call(&self, props: &P) -> Option<Node> {
        (self.0)(props)
    }
}

impl<P> Clone for RenderFn<P> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

// =============================================================================
// Slot Content
// =============================================================================

/// What a slot holds.
///
/// Equality is identity, matching how outlets decide whether a write is
/// needed: re-registering the same allocation is a no-op, a new one always
/// propagates.
#[derive(Clone, Default)]
pub enum SlotContent {
    /// Registered but renders nothing of its own; readers fall back.
    #[default]
    Empty,
    /// Static content.
    Node(Node),
    /// Render-prop content. Holds a type-erased `RenderFn<P>`.
    Render(Rc<dyn Any>),
}

impl SlotContent {
    /// Render-prop content invoked with the reader's props.
    ///
    /// ```ignore
    /// struct Counter { count: i32 }
    ///
    /// let doubled = SlotContent::render(|p: &Counter| {
    ///     let value = p.count * 2;
    ///     Some(text_node(value.to_string()))
    /// });
    /// ```
    pub fn render<P: 'static>(render: impl Fn(&P) -> Option<Node> + 'static) -> Self {
        SlotContent::Render(Rc::new(RenderFn::new(render)))
    }

    /// Resolve to a node for the given render-site props.
    ///
    /// Returns `Err(())` when this is render-prop content registered for a
    /// different props type.
    pub(crate) fn resolve<P: 'static>(&self, props: &P) -> Result<Option<Node>, ()> {
        match self {
            SlotContent::Empty => Ok(None),
            SlotContent::Node(node) => Ok(Some(node.clone())),
            SlotContent::Render(any) => match any.downcast_ref::<RenderFn<P>>() {
                Some(render) => Ok(render.call(props)),
                None => Err(()),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SlotContent::Empty)
    }
}

impl PartialEq for SlotContent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SlotContent::Empty, SlotContent::Empty) => true,
            (SlotContent::Node(a), SlotContent::Node(b)) => a.ptr_eq(b),
            (SlotContent::Render(a), SlotContent::Render(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for SlotContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotContent::Empty => write!(f, "Empty"),
            SlotContent::Node(node) => write!(f, "{:?}", node),
            SlotContent::Render(any) => {
                write!(f, "Render({:p})", Rc::as_ptr(any) as *const ())
            }
        }
    }
}

impl From<Node> for SlotContent {
    fn from(node: Node) -> Self {
        SlotContent::Node(node)
    }
}

impl From<Option<Node>> for SlotContent {
    fn from(node: Option<Node>) -> Self {
        node.map_or(SlotContent::Empty, SlotContent::Node)
    }
}
