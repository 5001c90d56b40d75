//! Widget nodes and the hook trait concrete widgets implement.
//!
//! # Architecture
//!
//! Every widget lives in a [`Node`]: a shared-ownership cell holding the
//! generic layout state (allocation, requisition, visibility, parent link,
//! children, render cache) followed by the concrete widget value. Handles are
//! `Rc<Node<W>>` for a concrete `W` and [`WidgetPtr`] (`Rc<Node>`) once
//! type-erased; a typed handle dereferences to the erased node so the whole
//! generic API is available on both.
//!
//! Concrete widgets implement [`Widget`], overriding only the hooks they
//! need. Hooks take `&self`; widgets keep mutable state in `Cell`/`RefCell`
//! so a hook may call back into its own node (for example a window resizing
//! itself while handling a pointer move) without borrow conflicts.
//!
//! Ownership flows strictly parent to child. The parent link is a `Weak`
//! reference, so a subtree is dropped as soon as the last strong handle
//! to its root goes away.

mod container;
mod node;

pub use node::{Node, ToWidget, WidgetId, WidgetPtr};

use std::any::Any;

use trellis_core::geometry::{Rect, Size};
use trellis_core::math::Vec2;

use crate::event::{Event, MouseButton};
use crate::render::RenderTarget;

/// Behaviour hooks of a concrete widget kind.
pub trait Widget: Any {
    /// Name used for theme lookups and diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this widget may own children.
    fn is_container(&self) -> bool {
        false
    }

    /// Compute the minimum size this widget needs.
    ///
    /// Called lazily by [`Node::requisition`] when the cached value is stale.
    fn calculate_requisition(&self, node: &Node) -> Size<f32>;

    /// The node's allocation was replaced. Containers re-allocate their
    /// children here.
    fn handle_allocation_change(&self, _node: &Node, _old_allocation: Rect<f32>) {}

    /// A child was appended to the node's children.
    ///
    /// The child has no parent link yet. Removing it again from inside the
    /// hook vetoes the add.
    fn handle_add(&self, _node: &Node, _child: &WidgetPtr) {}

    /// A child was removed.
    fn handle_remove(&self, _node: &Node, _child: &WidgetPtr) {}

    /// A descendant dropped its render cache.
    fn handle_child_invalidate(&self, node: &Node, child: &Node) {
        node.forward_child_invalidate(child);
    }

    /// Expose everything below the node. The node itself has already been
    /// drawn.
    fn handle_expose(&self, node: &Node, target: &mut dyn RenderTarget) {
        node.expose_children(target);
    }

    /// Process an event for this widget's own interaction logic.
    ///
    /// Pointer coordinates are in the parent's local space, the same space
    /// as [`Node::allocation`].
    fn handle_event(&self, node: &Node, event: &Event) {
        match event {
            Event::PointerMoved(position) => self.handle_pointer_move(node, *position),
            Event::PointerButtonPressed { button, position } => {
                self.handle_pointer_button(node, *button, true, *position)
            }
            Event::PointerButtonReleased { button, position } => {
                self.handle_pointer_button(node, *button, false, *position)
            }
            _ => {}
        }
    }

    fn handle_pointer_move(&self, _node: &Node, _position: Vec2) {}

    fn handle_pointer_button(
        &self,
        _node: &Node,
        _button: MouseButton,
        _pressed: bool,
        _position: Vec2,
    ) {
    }

    fn handle_pointer_enter(&self, _node: &Node) {}

    fn handle_pointer_leave(&self, _node: &Node) {}
}
