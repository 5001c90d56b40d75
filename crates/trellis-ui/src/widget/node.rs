use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use trellis_core::geometry::{Rect, Size};
use trellis_core::math::Vec2;
use trellis_core::profiling::profile_function;

use super::Widget;
use crate::context::Context;
use crate::dirty::DirtyFlags;
use crate::draw_list::Drawable;
use crate::event::Event;
use crate::render::RenderTarget;

/// Type-erased shared handle to a widget node.
pub type WidgetPtr = Rc<Node>;

/// Process-unique widget identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

static_assertions::assert_eq_size!(WidgetId, u64);
// Trees are confined to the thread that built them.
static_assertions::assert_not_impl_any!(Node: Send, Sync);

/// A widget together with its generic layout and render state.
///
/// `W` is the concrete widget; it defaults to `dyn Widget` for erased
/// handles.
pub struct Node<W: ?Sized = dyn Widget> {
    pub(super) id: WidgetId,
    pub(super) context: Context,
    pub(super) this: Weak<Node>,
    pub(super) parent: RefCell<Option<Weak<Node>>>,
    pub(super) children: RefCell<Vec<WidgetPtr>>,
    pub(super) allocation: Cell<Rect<f32>>,
    pub(super) requisition: Cell<Size<f32>>,
    pub(super) dirty: Cell<DirtyFlags>,
    pub(super) visible: Cell<bool>,
    pub(super) hovered: Cell<bool>,
    pub(super) drawable: RefCell<Option<Rc<Drawable>>>,
    pub(super) widget: W,
}

impl<W: Widget> Node<W> {
    /// Wrap `widget` in a fresh node.
    ///
    /// Widget factories call this and then perform their post-construction
    /// setup (usually a resize request) before handing the node out.
    pub fn new(context: &Context, widget: W) -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<Node<W>>| {
            let this: Weak<Node> = this.clone();
            Node {
                id: WidgetId::next(),
                context: context.clone(),
                this,
                parent: RefCell::new(None),
                children: RefCell::new(Vec::new()),
                allocation: Cell::new(Rect::ZERO),
                requisition: Cell::new(Size::ZERO),
                dirty: Cell::new(DirtyFlags::REQUISITION | DirtyFlags::DRAWABLE),
                visible: Cell::new(true),
                hovered: Cell::new(false),
                drawable: RefCell::new(None),
                widget,
            }
        })
    }
}

impl<W: ?Sized + Widget> Node<W> {
    /// The concrete widget.
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Shared handle to this node.
    ///
    /// Only `None` while the node is being dropped.
    pub fn to_ptr(&self) -> Option<WidgetPtr> {
        self.this.upgrade()
    }
}

impl<W: Widget> Deref for Node<W> {
    type Target = Node;

    fn deref(&self) -> &Node {
        self
    }
}

/// Conversion of typed and erased handles into a [`WidgetPtr`].
pub trait ToWidget {
    fn to_widget(&self) -> WidgetPtr;
}

impl<W: Widget> ToWidget for Rc<Node<W>> {
    fn to_widget(&self) -> WidgetPtr {
        Rc::clone(self) as WidgetPtr
    }
}

impl ToWidget for WidgetPtr {
    fn to_widget(&self) -> WidgetPtr {
        Rc::clone(self)
    }
}

impl Node {
    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.widget.name()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Borrow the concrete widget if it is a `T`.
    pub fn downcast_ref<T: Widget>(&self) -> Option<&T> {
        (&self.widget as &dyn Any).downcast_ref::<T>()
    }

    pub fn is<T: Widget>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty.get()
    }

    pub(crate) fn mark_dirty(&self, flags: DirtyFlags) {
        self.dirty.set(self.dirty.get() | flags);
    }

    pub(crate) fn clear_dirty(&self, flags: DirtyFlags) {
        self.dirty.set(self.dirty.get() - flags);
    }

    // Layout

    /// Rectangle assigned by the parent, relative to the parent's origin.
    pub fn allocation(&self) -> Rect<f32> {
        self.allocation.get()
    }

    /// Assign a new allocation.
    ///
    /// Identical allocations are ignored unless the node lies on a pending
    /// resize chain. A size change drops the render cache; a position change
    /// refreshes the absolute positions of the whole subtree.
    pub fn set_allocation(&self, allocation: Rect<f32>) {
        let old = self.allocation.get();
        if old == allocation && !self.dirty.get().needs_allocation() {
            return;
        }

        self.allocation.set(allocation);
        self.clear_dirty(DirtyFlags::ALLOCATION);

        self.widget.handle_allocation_change(self, old);

        if old.position() != allocation.position() {
            self.handle_absolute_position_change();
            self.notify_invalidated();
        }
        if old.size() != allocation.size() {
            self.invalidate();
        }
    }

    /// Move the node without changing its size.
    pub fn set_position(&self, position: Vec2) {
        let allocation = self.allocation();
        self.set_allocation(Rect::from_position_size(position, allocation.size()));
    }

    /// Minimum size the widget needs, recomputed only when stale.
    pub fn requisition(&self) -> Size<f32> {
        if self.dirty.get().needs_requisition() {
            let requisition = self.widget.calculate_requisition(self);
            self.requisition.set(requisition);
            self.clear_dirty(DirtyFlags::REQUISITION);
            self.context.metrics().record_requisition();
        }
        self.requisition.get()
    }

    /// Mark this node and every ancestor as needing a new layout, then run
    /// the layout pass from the root.
    pub fn request_resize(&self) {
        self.mark_dirty(DirtyFlags::RESIZE_CHAIN);

        let mut root = None;
        let mut cursor = self.parent();
        while let Some(ancestor) = cursor {
            ancestor.mark_dirty(DirtyFlags::RESIZE_CHAIN);
            cursor = ancestor.parent();
            root = Some(ancestor);
        }

        match root {
            Some(root) => root.layout_root(),
            None => self.layout_root(),
        }
    }

    /// Grow the root's allocation to at least its requisition. Containers
    /// pass the allocation down through `handle_allocation_change`.
    fn layout_root(&self) {
        profile_function!();
        let _timer = self.context.metrics().start_layout_pass();

        let requisition = self.requisition();
        let current = self.allocation();
        let allocation = Rect::new(
            current.x,
            current.y,
            current.width.max(requisition.width),
            current.height.max(requisition.height),
        );

        tracing::trace!(
            widget = self.name(),
            id = self.id.as_u64(),
            ?allocation,
            "layout pass"
        );
        self.set_allocation(allocation);
    }

    // Visibility

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Show or hide the widget. Hidden widgets are skipped by event dispatch
    /// and exposure.
    pub fn show(&self, visible: bool) {
        if self.visible.get() == visible {
            return;
        }
        self.visible.set(visible);
        self.request_resize();
        self.invalidate();
    }

    /// Whether the last pointer move seen by this widget was inside its
    /// allocation.
    pub fn is_hovered(&self) -> bool {
        self.hovered.get()
    }

    // Invalidation and rendering

    /// Drop the cached drawable and notify the parent chain.
    pub fn invalidate(&self) {
        self.drawable.borrow_mut().take();
        self.mark_dirty(DirtyFlags::DRAWABLE);
        self.notify_invalidated();
    }

    fn notify_invalidated(&self) {
        match self.parent() {
            Some(parent) => parent.handle_child_invalidate(self),
            None => self.mark_dirty(DirtyFlags::REDRAW),
        }
    }

    /// Entry point for invalidation bubbling from `child`.
    pub fn handle_child_invalidate(&self, child: &Node) {
        self.widget.handle_child_invalidate(self, child);
    }

    /// Default bubbling step: hand the notification to the parent, or record
    /// a redraw request at the root.
    pub fn forward_child_invalidate(&self, child: &Node) {
        match self.parent() {
            Some(parent) => parent.handle_child_invalidate(child),
            None => self.mark_dirty(DirtyFlags::REDRAW),
        }
    }

    /// Return and clear the root's pending redraw request.
    pub fn take_redraw_request(&self) -> bool {
        let requested = self.dirty.get().contains(DirtyFlags::REDRAW);
        self.clear_dirty(DirtyFlags::REDRAW);
        requested
    }

    /// Cached drawable, built through the engine on first use after an
    /// invalidation.
    pub fn drawable(&self) -> Rc<Drawable> {
        if let Some(drawable) = self.drawable.borrow().as_ref() {
            return Rc::clone(drawable);
        }

        let list = self.context.engine().create_drawable(self);
        let drawable = Rc::new(Drawable::new(list, self.absolute_position()));
        *self.drawable.borrow_mut() = Some(Rc::clone(&drawable));
        self.clear_dirty(DirtyFlags::DRAWABLE);
        self.context.metrics().record_drawable();
        drawable
    }

    /// Position of the allocation's origin in root coordinates.
    pub fn absolute_position(&self) -> Vec2 {
        let mut position = self.allocation().position();
        let mut cursor = self.parent();
        while let Some(ancestor) = cursor {
            position += ancestor.allocation().position();
            cursor = ancestor.parent();
        }
        position
    }

    /// An ancestor moved: refresh absolute-position dependent state of the
    /// subtree without touching relative allocations.
    pub fn handle_absolute_position_change(&self) {
        for child in self.children() {
            child.handle_absolute_position_change();
        }
        self.update_drawable_position();
    }

    fn update_drawable_position(&self) {
        if let Some(drawable) = self.drawable.borrow().as_ref() {
            drawable.set_position(self.absolute_position());
        }
    }

    /// Draw this subtree into `target` and flush it once.
    pub fn expose(&self, target: &mut dyn RenderTarget) {
        profile_function!();
        self.expose_without_flush(target);
        target.flush();
        if self.parent().is_none() {
            self.clear_dirty(DirtyFlags::REDRAW);
        }
    }

    /// Draw this subtree into `target` without flushing.
    pub fn expose_without_flush(&self, target: &mut dyn RenderTarget) {
        if !self.is_visible() {
            return;
        }
        let drawable = self.drawable();
        target.draw(self.id, &drawable);
        self.widget.handle_expose(self, target);
    }

    /// Expose every child in order. Default body of
    /// [`Widget::handle_expose`].
    pub fn expose_children(&self, target: &mut dyn RenderTarget) {
        for child in self.children() {
            child.expose_without_flush(target);
        }
    }

    /// Recompute all cached state of the subtree, children first.
    pub fn refresh(&self) {
        for child in self.children() {
            child.refresh();
        }
        self.mark_dirty(DirtyFlags::REQUISITION);
        self.request_resize();
        self.invalidate();
    }

    // Events

    /// Deliver `event` to this subtree.
    ///
    /// Children receive a copy with pointer coordinates relative to this
    /// node's origin, in insertion order. The node's own widget then handles
    /// the untranslated event.
    pub fn handle_event(&self, event: &Event) {
        if !self.is_visible() {
            return;
        }
        self.context.metrics().record_event_delivery();

        let children = self.children();
        if !children.is_empty() {
            let local = event.to_local(self.allocation().position());
            for child in &children {
                child.handle_event(&local);
            }
        }

        if let Event::PointerMoved(position) = event {
            self.update_hover(*position);
        }
        self.widget.handle_event(self, event);
    }

    fn update_hover(&self, position: Vec2) {
        let inside = self.allocation().contains(position);
        if inside == self.hovered.get() {
            return;
        }
        self.hovered.set(inside);
        if inside {
            self.widget.handle_pointer_enter(self);
        } else {
            self.widget.handle_pointer_leave(self);
        }
        self.invalidate();
    }
}

impl<W: ?Sized + Widget> fmt::Debug for Node<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.widget.name())
            .field("allocation", &self.allocation.get())
            .field("visible", &self.visible.get())
            .field("children", &self.children.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Spacer;

    #[test]
    fn test_to_widget_shares_the_node() {
        let ctx = Context::default();
        let typed = Spacer::create(&ctx, Size::new(1.0, 1.0));

        let erased = typed.to_widget();
        let again = erased.to_widget();

        assert!(Rc::ptr_eq(&erased, &again));
        assert_eq!(erased.id(), typed.id());
        assert_eq!(Rc::strong_count(&typed), 3);
        assert!(erased.is::<Spacer>());
    }
}
