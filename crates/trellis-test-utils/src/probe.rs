use std::cell::{Cell, RefCell};
use std::rc::Rc;

use trellis_core::geometry::Size;
use trellis_ui::{Context, Event, Node, Widget};

/// Leaf widget recording every event it receives, in its parent's
/// coordinates.
#[derive(Debug, Default)]
pub struct EventProbe {
    events: RefCell<Vec<Event>>,
    enters: Cell<usize>,
    leaves: Cell<usize>,
    size: Size<f32>,
}

impl EventProbe {
    pub fn create(context: &Context, size: Size<f32>) -> Rc<Node<EventProbe>> {
        let probe = Node::new(
            context,
            EventProbe {
                size,
                ..Default::default()
            },
        );
        probe.request_resize();
        probe
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn last_event(&self) -> Option<Event> {
        self.events.borrow().last().cloned()
    }

    pub fn enters(&self) -> usize {
        self.enters.get()
    }

    pub fn leaves(&self) -> usize {
        self.leaves.get()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Widget for EventProbe {
    fn name(&self) -> &'static str {
        "EventProbe"
    }

    fn calculate_requisition(&self, _node: &Node) -> Size<f32> {
        self.size
    }

    fn handle_event(&self, _node: &Node, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }

    fn handle_pointer_enter(&self, _node: &Node) {
        self.enters.set(self.enters.get() + 1);
    }

    fn handle_pointer_leave(&self, _node: &Node) {
        self.leaves.set(self.leaves.get() + 1);
    }
}
