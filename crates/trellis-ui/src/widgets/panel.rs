use std::rc::Rc;

use trellis_core::geometry::{Rect, Size};
use trellis_core::math::Vec2;

use crate::context::Context;
use crate::widget::{Node, ToWidget, Widget};

/// Container positioning its children freely.
///
/// Children keep the position they were given and are allocated at least
/// their requisition. The panel requires the extent of all children.
#[derive(Debug, Default)]
pub struct Panel;

impl Panel {
    pub fn create(context: &Context) -> Rc<Node<Panel>> {
        let panel = Node::new(context, Panel);
        panel.request_resize();
        panel
    }
}

impl Node<Panel> {
    /// Add `widget` and place it at `position` in panel coordinates.
    pub fn put(&self, widget: &impl ToWidget, position: Vec2) {
        let widget = widget.to_widget();
        self.add(&widget);
        if self.is_child(&widget) {
            widget.set_position(position);
            self.request_resize();
        }
    }
}

impl Widget for Panel {
    fn name(&self) -> &'static str {
        "Panel"
    }

    fn is_container(&self) -> bool {
        true
    }

    fn calculate_requisition(&self, node: &Node) -> Size<f32> {
        node.children()
            .iter()
            .filter(|child| child.is_visible())
            .fold(Size::ZERO, |extent, child| {
                let position = child.allocation().position();
                let requisition = child.requisition();
                extent.max(Size::new(
                    position.x + requisition.width,
                    position.y + requisition.height,
                ))
            })
    }

    fn handle_allocation_change(&self, node: &Node, _old_allocation: Rect<f32>) {
        for child in node.children() {
            let current = child.allocation();
            let size = current.size().max(child.requisition());
            child.set_allocation(Rect::from_position_size(current.position(), size));
        }
    }
}
