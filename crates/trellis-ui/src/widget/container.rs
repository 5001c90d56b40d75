//! Structural mutation of the widget tree.

use std::rc::{Rc, Weak};

use super::node::{Node, WidgetPtr};

impl Node {
    /// The containing node, if attached.
    pub fn parent(&self) -> Option<WidgetPtr> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn set_parent(&self, parent: Option<&Node>) {
        *self.parent.borrow_mut() = parent.map(|parent| parent.this.clone());
    }

    /// Whether this node may own children.
    pub fn is_container(&self) -> bool {
        self.widget.is_container()
    }

    /// Snapshot of the ordered children.
    ///
    /// A snapshot rather than a borrow, so hooks called while iterating may
    /// add or remove children.
    pub fn children(&self) -> Vec<WidgetPtr> {
        self.children.borrow().clone()
    }

    /// First child, the only one a single-child container can hold.
    pub fn child(&self) -> Option<WidgetPtr> {
        self.children.borrow().first().cloned()
    }

    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    /// Identity-based membership test.
    pub fn is_child(&self, widget: &Node) -> bool {
        self.children
            .borrow()
            .iter()
            .any(|child| std::ptr::addr_eq(Rc::as_ptr(child), widget))
    }

    /// Whether `widget` lies strictly below this node.
    pub fn is_ancestor_of(&self, widget: &Node) -> bool {
        let mut cursor = widget.parent();
        while let Some(ancestor) = cursor {
            if std::ptr::addr_eq(Rc::as_ptr(&ancestor), self) {
                return true;
            }
            cursor = ancestor.parent();
        }
        false
    }

    /// Append `widget` to the children.
    ///
    /// Adding a current child is a no-op. The widget's `handle_add` hook may
    /// veto the add by removing the child again; only a child that survives
    /// the hook is detached from its old parent, gets its parent link and
    /// triggers a resize. A vetoed widget stays where it was.
    pub fn add(&self, widget: &WidgetPtr) {
        if !self.is_container() {
            tracing::warn!(
                widget = self.name(),
                child = widget.name(),
                "attempted to add a child to a non-container widget"
            );
            return;
        }
        if self.is_child(widget) {
            return;
        }
        if std::ptr::addr_eq(Rc::as_ptr(widget), self) || widget.is_ancestor_of(self) {
            tracing::warn!(
                widget = self.name(),
                child = widget.name(),
                "refusing to add an ancestor as a child"
            );
            return;
        }

        self.children.borrow_mut().push(Rc::clone(widget));
        debug_assert_eq!(
            self.children
                .borrow()
                .iter()
                .filter(|child| Rc::ptr_eq(child, widget))
                .count(),
            1
        );
        self.widget.handle_add(self, widget);

        if self.is_child(widget) {
            if let Some(old_parent) = widget.parent() {
                old_parent.remove(widget);
            }
            widget.set_parent(Some(self));
            tracing::trace!(
                parent = self.name(),
                parent_id = self.id().as_u64(),
                child = widget.name(),
                child_id = widget.id().as_u64(),
                "child added"
            );
            self.request_resize();
        }
    }

    /// Detach `widget`. Removing a widget that is not a child is a no-op.
    pub fn remove(&self, widget: &WidgetPtr) {
        let removed = {
            let mut children = self.children.borrow_mut();
            match children
                .iter()
                .position(|child| Rc::ptr_eq(child, widget))
            {
                Some(index) => children.remove(index),
                None => return,
            }
        };

        if removed
            .parent()
            .is_some_and(|parent| std::ptr::addr_eq(Rc::as_ptr(&parent), self))
        {
            removed.set_parent(None);
        }

        tracing::trace!(
            parent = self.name(),
            parent_id = self.id().as_u64(),
            child = removed.name(),
            child_id = removed.id().as_u64(),
            "child removed"
        );
        self.request_resize();
        self.widget.handle_remove(self, &removed);
    }
}
