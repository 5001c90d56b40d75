use std::rc::Rc;

use trellis_core::geometry::{Rect, Size};

use crate::context::Context;
use crate::widget::{Node, Widget, WidgetPtr};

/// Container holding at most one child.
///
/// The child is given the bin's full allocation.
#[derive(Debug, Default)]
pub struct Bin;

impl Bin {
    pub fn create(context: &Context) -> Rc<Node<Bin>> {
        let bin = Node::new(context, Bin);
        bin.request_resize();
        bin
    }

    /// Single-child admission shared by every bin-like widget: a child
    /// arriving while another is present is evicted again.
    pub(crate) fn admit(node: &Node, child: &WidgetPtr) {
        if node.child_count() > 1 {
            tracing::warn!(
                widget = node.name(),
                child = child.name(),
                "bin already holds a child, rejecting"
            );
            node.remove(child);
        }
    }
}

impl Widget for Bin {
    fn name(&self) -> &'static str {
        "Bin"
    }

    fn is_container(&self) -> bool {
        true
    }

    fn calculate_requisition(&self, node: &Node) -> Size<f32> {
        node.child()
            .map(|child| child.requisition())
            .unwrap_or(Size::ZERO)
    }

    fn handle_allocation_change(&self, node: &Node, _old_allocation: Rect<f32>) {
        if let Some(child) = node.child() {
            let size = node.allocation().size();
            child.set_allocation(Rect::new(0.0, 0.0, size.width, size.height));
        }
    }

    fn handle_add(&self, node: &Node, child: &WidgetPtr) {
        Bin::admit(node, child);
    }
}
