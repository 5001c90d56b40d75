//! Structural operations: add, remove, ownership and reparenting.

use std::rc::Rc;

use trellis_ui::{Bin, Context, Node, Panel, Size, Spacer, ToWidget, Vec2, WidgetPtr, Window};

fn spacer(ctx: &Context) -> WidgetPtr {
    Spacer::create(ctx, Size::new(10.0, 10.0)).to_widget()
}

fn parent_is(widget: &WidgetPtr, parent: &Node) -> bool {
    widget
        .parent()
        .is_some_and(|p| std::ptr::addr_eq(Rc::as_ptr(&p), parent))
}

#[test]
fn test_add_is_idempotent() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let w = spacer(&ctx);

    panel.add(&w);
    panel.add(&w);

    assert_eq!(panel.child_count(), 1);
    assert!(panel.is_child(&w));
}

#[test]
fn test_children_keep_insertion_order() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let (a, b, c) = (spacer(&ctx), spacer(&ctx), spacer(&ctx));

    panel.add(&a);
    panel.add(&b);
    panel.add(&c);

    let ids: Vec<_> = panel.children().iter().map(|w| w.id()).collect();
    assert_eq!(ids, vec![a.id(), b.id(), c.id()]);
}

#[test]
fn test_remove_non_child_is_noop() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let other = Panel::create(&ctx);
    let a = spacer(&ctx);
    let stranger = spacer(&ctx);
    panel.add(&a);
    other.add(&stranger);

    panel.remove(&stranger);

    assert_eq!(panel.child_count(), 1);
    assert!(parent_is(&a, &panel));
    assert!(parent_is(&stranger, &other));
}

#[test]
fn test_ownership_invariant_holds_after_mutation() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let widgets: Vec<_> = (0..5).map(|_| spacer(&ctx)).collect();

    for widget in &widgets {
        panel.add(widget);
    }
    panel.remove(&widgets[1]);
    panel.remove(&widgets[3]);
    panel.add(&widgets[1]);

    for child in panel.children() {
        assert!(parent_is(&child, &panel));
    }
    assert_eq!(panel.child_count(), 4);
    assert!(widgets[3].parent().is_none());
}

#[test]
fn test_reparenting_detaches_from_old_parent() {
    let ctx = Context::default();
    let first = Panel::create(&ctx);
    let second = Panel::create(&ctx);
    let w = spacer(&ctx);

    first.add(&w);
    second.add(&w);

    assert!(!first.is_child(&w));
    assert!(second.is_child(&w));
    assert!(parent_is(&w, &second));
}

#[test]
fn test_bin_rejects_second_child() {
    let ctx = Context::default();
    let bin = Bin::create(&ctx);
    let first = spacer(&ctx);
    let second = spacer(&ctx);

    bin.add(&first);
    bin.add(&second);

    assert_eq!(bin.child_count(), 1);
    assert!(bin.is_child(&first));
    assert!(second.parent().is_none());
}

#[test]
fn test_rejected_add_leaves_widget_with_old_parent() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let bin = Bin::create(&ctx);
    let occupant = spacer(&ctx);
    let w = spacer(&ctx);
    panel.add(&w);
    bin.add(&occupant);

    bin.add(&w);

    assert!(panel.is_child(&w));
    assert!(parent_is(&w, &panel));
    assert_eq!(bin.child_count(), 1);
    assert!(bin.is_child(&occupant));
}

#[test]
fn test_window_rejected_add_leaves_widget_with_old_parent() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let window = Window::create(&ctx);
    let occupant = spacer(&ctx);
    let w = spacer(&ctx);
    panel.put(&w, Vec2::new(4.0, 6.0));
    window.add(&occupant);

    window.add(&w);

    assert!(panel.is_child(&w));
    assert!(parent_is(&w, &panel));
    assert_eq!(w.allocation().position(), Vec2::new(4.0, 6.0));
    assert_eq!(window.child().map(|c| c.id()), Some(occupant.id()));
}

#[test]
fn test_window_accepts_a_single_child() {
    let ctx = Context::default();
    let window = Window::create(&ctx);
    let first = spacer(&ctx);
    let second = spacer(&ctx);

    window.add(&first);
    window.add(&second);

    assert_eq!(window.child().map(|c| c.id()), Some(first.id()));
}

#[test]
fn test_cycle_guard() {
    let ctx = Context::default();
    let outer = Panel::create(&ctx).to_widget();
    let inner = Panel::create(&ctx).to_widget();
    outer.add(&inner);

    inner.add(&outer);
    outer.add(&outer);

    assert!(outer.parent().is_none());
    assert_eq!(inner.child_count(), 0);
    assert_eq!(outer.child_count(), 1);
}

#[test]
fn test_leaf_refuses_children() {
    let ctx = Context::default();
    let leaf = spacer(&ctx);
    let other = spacer(&ctx);

    leaf.add(&other);

    assert_eq!(leaf.child_count(), 0);
    assert!(other.parent().is_none());
}

#[test]
fn test_removed_widget_outlives_parent_share() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let w = spacer(&ctx);
    panel.add(&w);
    assert_eq!(Rc::strong_count(&w), 2);

    panel.remove(&w);
    assert_eq!(Rc::strong_count(&w), 1);
    assert!(w.parent().is_none());
}

#[test]
fn test_dropping_parent_drops_children() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let w = Spacer::create(&ctx, Size::new(1.0, 1.0));
    let weak = Rc::downgrade(&w);
    panel.put(&w, Vec2::new(0.0, 0.0));
    drop(w);
    assert!(weak.upgrade().is_some());

    drop(panel);
    assert!(weak.upgrade().is_none());
}
