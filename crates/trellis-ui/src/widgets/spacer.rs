use std::cell::Cell;
use std::rc::Rc;

use trellis_core::geometry::Size;

use crate::context::Context;
use crate::widget::{Node, Widget};

/// Leaf widget occupying a fixed minimum size.
#[derive(Debug)]
pub struct Spacer {
    min_size: Cell<Size<f32>>,
}

impl Spacer {
    pub fn create(context: &Context, min_size: Size<f32>) -> Rc<Node<Spacer>> {
        let spacer = Node::new(
            context,
            Spacer {
                min_size: Cell::new(min_size),
            },
        );
        spacer.request_resize();
        spacer
    }

    pub fn min_size(&self) -> Size<f32> {
        self.min_size.get()
    }
}

impl Node<Spacer> {
    pub fn set_min_size(&self, min_size: Size<f32>) {
        if self.widget().min_size.replace(min_size) != min_size {
            self.request_resize();
        }
    }
}

impl Widget for Spacer {
    fn name(&self) -> &'static str {
        "Spacer"
    }

    fn calculate_requisition(&self, _node: &Node) -> Size<f32> {
        self.min_size.get()
    }
}
