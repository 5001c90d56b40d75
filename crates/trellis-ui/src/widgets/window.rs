use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bitflags::bitflags;
use trellis_core::geometry::{Rect, Size};
use trellis_core::math::Vec2;

use super::Bin;
use crate::context::Context;
use crate::event::MouseButton;
use crate::style::property;
use crate::widget::{Node, Widget, WidgetPtr};

bitflags! {
    /// Chrome elements of a [`Window`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowStyle: u8 {
        const NO_STYLE = 0;
        const TITLEBAR = 1 << 0;
        const BACKGROUND = 1 << 1;
        const RESIZE = 1 << 2;
        const TOPLEVEL = Self::TITLEBAR.bits() | Self::BACKGROUND.bits() | Self::RESIZE.bits();
    }
}

impl Default for WindowStyle {
    fn default() -> Self {
        WindowStyle::TOPLEVEL
    }
}

/// Pointer interaction in progress on a window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Title bar grabbed; `offset` is the grab point relative to the
    /// window origin.
    Dragging { offset: Vec2 },
    /// Resize handle grabbed; `offset` is the bottom-right corner relative
    /// to the grab point.
    Resizing { offset: Vec2 },
}

/// Fallback size of a window without content.
const EMPTY_WIDTH: f32 = 50.0;
const EMPTY_HEIGHT: f32 = 2.0 * EMPTY_WIDTH;

/// Top-level single-child container with a title bar, a border and a resize
/// handle.
#[derive(Debug, Default)]
pub struct Window {
    style: Cell<WindowStyle>,
    title: RefCell<String>,
    interaction: Cell<Interaction>,
}

impl Window {
    /// Create a window with the [`WindowStyle::TOPLEVEL`] style, already
    /// sized to its requisition.
    pub fn create(context: &Context) -> Rc<Node<Window>> {
        let window = Node::new(context, Window::default());
        window.request_resize();
        window
    }

    pub fn style(&self) -> WindowStyle {
        self.style.get()
    }

    /// Whether every flag of `style` is set.
    pub fn has_style(&self, style: WindowStyle) -> bool {
        self.style.get().contains(style)
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction.get()
    }

    /// Area offered to the child, in the window's local coordinates.
    pub fn client_rect(&self, node: &Node) -> Rect<f32> {
        let engine = node.context().engine();
        let size = node.allocation().size();
        let inset =
            engine.metric(property::BORDER_WIDTH, node) + engine.metric(property::GAP, node);

        let mut client = Rect::new(0.0, 0.0, size.width, size.height).inset(inset);
        if self.has_style(WindowStyle::TITLEBAR) {
            let title_height = engine.metric(property::TITLE_HEIGHT, node);
            client.y += title_height;
            client.height = (client.height - title_height).max(0.0);
        }
        client
    }

    fn allocate_child(&self, node: &Node) {
        if let Some(child) = node.child() {
            child.set_allocation(self.client_rect(node));
        }
    }

    fn title_area(&self, node: &Node) -> Rect<f32> {
        let allocation = node.allocation();
        let title_height = node.context().engine().metric(property::TITLE_HEIGHT, node);
        Rect::new(allocation.x, allocation.y, allocation.width, title_height)
    }

    fn handle_area(&self, node: &Node) -> Rect<f32> {
        let allocation = node.allocation();
        let handle = node.context().engine().metric(property::HANDLE_SIZE, node);
        Rect::new(
            allocation.right() - handle,
            allocation.bottom() - handle,
            handle,
            handle,
        )
    }
}

impl Node<Window> {
    pub fn set_title(&self, title: impl Into<String>) {
        *self.widget().title.borrow_mut() = title.into();
        self.invalidate();
    }

    /// Replace the style flags.
    ///
    /// Cancels any drag or resize in progress and re-lays out the window.
    pub fn set_style(&self, style: WindowStyle) {
        let window = self.widget();
        window.style.set(style);
        window.interaction.set(Interaction::Idle);

        self.request_resize();
        self.invalidate();
        window.allocate_child(self);
    }

    pub fn client_rect(&self) -> Rect<f32> {
        self.widget().client_rect(self)
    }
}

impl Widget for Window {
    fn name(&self) -> &'static str {
        "Window"
    }

    fn is_container(&self) -> bool {
        true
    }

    fn calculate_requisition(&self, node: &Node) -> Size<f32> {
        let engine = node.context().engine();
        let inset = 2.0 * engine.metric(property::BORDER_WIDTH, node)
            + 2.0 * engine.metric(property::GAP, node);
        let mut requisition = Size::new(inset, inset);

        if self.has_style(WindowStyle::TITLEBAR) {
            requisition.height += engine.metric(property::TITLE_HEIGHT, node);
        }

        match node.child() {
            Some(child) => requisition + child.requisition(),
            None => Size::new(
                requisition.width.max(EMPTY_WIDTH),
                (2.0 * requisition.height).max(EMPTY_HEIGHT),
            ),
        }
    }

    fn handle_allocation_change(&self, node: &Node, _old_allocation: Rect<f32>) {
        self.allocate_child(node);
    }

    fn handle_add(&self, node: &Node, child: &WidgetPtr) {
        Bin::admit(node, child);

        if node.is_child(child) {
            // Start over from a placeholder so the next pass sizes the
            // window for the new content.
            let allocation = node.allocation();
            node.set_allocation(Rect::new(allocation.x, allocation.y, 1.0, 1.0));
            node.request_resize();
        }
    }

    fn handle_pointer_button(&self, node: &Node, button: MouseButton, pressed: bool, position: Vec2) {
        if button != MouseButton::Left {
            return;
        }

        if !pressed {
            self.interaction.set(Interaction::Idle);
            return;
        }

        if self.interaction.get() != Interaction::Idle {
            return;
        }

        let allocation = node.allocation();
        // The title strip shadows the resize handle even without a title bar.
        if self.title_area(node).contains(position) {
            if self.has_style(WindowStyle::TITLEBAR) {
                let offset = position - allocation.position();
                tracing::debug!(id = node.id().as_u64(), ?offset, "window drag started");
                self.interaction.set(Interaction::Dragging { offset });
            }
        } else if self.has_style(WindowStyle::RESIZE) && self.handle_area(node).contains(position) {
            let offset = Vec2::new(allocation.right(), allocation.bottom()) - position;
            tracing::debug!(id = node.id().as_u64(), ?offset, "window resize started");
            self.interaction.set(Interaction::Resizing { offset });
        }
    }

    fn handle_pointer_move(&self, node: &Node, position: Vec2) {
        match self.interaction.get() {
            Interaction::Idle => {}
            Interaction::Dragging { offset } => node.set_position(position - offset),
            Interaction::Resizing { offset } => {
                let allocation = node.allocation();
                let requisition = node.requisition();
                let corner = position + offset - allocation.position();
                node.set_allocation(Rect::new(
                    allocation.x,
                    allocation.y,
                    requisition.width.max(corner.x),
                    requisition.height.max(corner.y),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Theme, WILDCARD};

    fn flat_context() -> Context {
        let mut theme = Theme::empty();
        theme
            .set(WILDCARD, property::BORDER_WIDTH, 1.0)
            .set(WILDCARD, property::GAP, 2.0)
            .set("Window", property::TITLE_HEIGHT, 20.0)
            .set("Window", property::HANDLE_SIZE, 10.0);
        Context::with_theme(theme)
    }

    #[test]
    fn test_empty_requisition() {
        let ctx = flat_context();
        let window = Window::create(&ctx);
        // insets: 6 wide, 26 high with the title bar
        assert_eq!(window.requisition(), Size::new(50.0, 100.0));

        window.set_style(WindowStyle::NO_STYLE);
        assert_eq!(window.requisition(), Size::new(50.0, 100.0));
    }

    #[test]
    fn test_client_rect_insets() {
        let ctx = flat_context();
        let window = Window::create(&ctx);
        window.set_allocation(Rect::new(10.0, 10.0, 100.0, 80.0));

        assert_eq!(window.client_rect(), Rect::new(3.0, 23.0, 94.0, 54.0));

        window.set_style(WindowStyle::BACKGROUND);
        window.set_allocation(Rect::new(10.0, 10.0, 100.0, 80.0));
        assert_eq!(window.client_rect(), Rect::new(3.0, 3.0, 94.0, 74.0));
    }

    #[test]
    fn test_non_primary_buttons_ignored() {
        let ctx = flat_context();
        let window = Window::create(&ctx);
        window.set_allocation(Rect::new(0.0, 0.0, 200.0, 150.0));

        let widget = window.widget();
        widget.handle_pointer_button(&window, MouseButton::Right, true, Vec2::new(5.0, 5.0));
        assert_eq!(widget.interaction(), Interaction::Idle);
    }

    #[test]
    fn test_title_strip_shadows_resize_handle() {
        let ctx = flat_context();
        let window = Window::create(&ctx);
        window.set_style(WindowStyle::RESIZE);
        // Short enough for the handle to overlap the title strip.
        window.set_allocation(Rect::new(0.0, 0.0, 200.0, 15.0));

        let widget = window.widget();
        widget.handle_pointer_button(&window, MouseButton::Left, true, Vec2::new(195.0, 10.0));
        assert_eq!(widget.interaction(), Interaction::Idle);

        window.set_allocation(Rect::new(0.0, 0.0, 200.0, 150.0));
        widget.handle_pointer_button(&window, MouseButton::Left, true, Vec2::new(195.0, 145.0));
        assert!(matches!(widget.interaction(), Interaction::Resizing { .. }));
    }

    #[test]
    fn test_resize_handle_needs_resize_style() {
        let ctx = flat_context();
        let window = Window::create(&ctx);
        window.set_style(WindowStyle::TITLEBAR);
        window.set_allocation(Rect::new(0.0, 0.0, 200.0, 150.0));

        let widget = window.widget();
        widget.handle_pointer_button(&window, MouseButton::Left, true, Vec2::new(195.0, 145.0));
        assert_eq!(widget.interaction(), Interaction::Idle);
    }
}
