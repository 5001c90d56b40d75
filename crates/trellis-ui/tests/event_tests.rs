//! Event broadcast, coordinate translation and hover tracking.

use trellis_test_utils::EventProbe;
use trellis_ui::{
    Context, Event, EventQueue, MouseButton, Panel, Rect, Size, ToWidget, Vec2, Window,
};

fn press(x: f32, y: f32) -> Event {
    Event::PointerButtonPressed {
        button: MouseButton::Left,
        position: Vec2::new(x, y),
    }
}

#[test]
fn test_child_receives_local_coordinates() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let probe = EventProbe::create(&ctx, Size::new(5.0, 5.0));
    panel.put(&probe, Vec2::ZERO);
    panel.set_allocation(Rect::new(10.0, 20.0, 100.0, 50.0));

    panel.handle_event(&press(30.0, 40.0));

    assert_eq!(probe.widget().last_event(), Some(press(20.0, 20.0)));
}

#[test]
fn test_translation_accumulates_per_level() {
    let ctx = Context::default();
    let outer = Panel::create(&ctx);
    let inner = Panel::create(&ctx);
    let probe = EventProbe::create(&ctx, Size::new(5.0, 5.0));

    inner.put(&probe, Vec2::ZERO);
    outer.put(&inner, Vec2::new(5.0, 5.0));
    outer.set_allocation(Rect::new(10.0, 10.0, 100.0, 100.0));

    outer.handle_event(&Event::PointerMoved(Vec2::new(50.0, 50.0)));

    assert_eq!(
        probe.widget().last_event(),
        Some(Event::PointerMoved(Vec2::new(35.0, 35.0)))
    );
}

#[test]
fn test_every_child_sees_every_event_in_order() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let a = EventProbe::create(&ctx, Size::new(5.0, 5.0));
    let b = EventProbe::create(&ctx, Size::new(5.0, 5.0));
    panel.put(&a, Vec2::ZERO);
    // Far away from the pointer; broadcast still reaches it.
    panel.put(&b, Vec2::new(500.0, 500.0));

    panel.handle_event(&press(1.0, 1.0));
    panel.handle_event(&Event::KeyPressed { code: 7 });

    let expected = vec![press(1.0, 1.0), Event::KeyPressed { code: 7 }];
    assert_eq!(a.widget().events(), expected);
    assert_eq!(b.widget().events(), expected);
}

#[test]
fn test_invisible_subtree_skipped() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let probe = EventProbe::create(&ctx, Size::new(5.0, 5.0));
    panel.put(&probe, Vec2::ZERO);

    panel.show(false);
    panel.handle_event(&press(1.0, 1.0));
    assert!(probe.widget().events().is_empty());

    panel.show(true);
    probe.show(false);
    panel.handle_event(&press(1.0, 1.0));
    assert!(probe.widget().events().is_empty());
}

#[test]
fn test_hover_enter_and_leave() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let probe = EventProbe::create(&ctx, Size::new(10.0, 10.0));
    panel.put(&probe, Vec2::new(20.0, 20.0));

    panel.handle_event(&Event::PointerMoved(Vec2::new(25.0, 25.0)));
    assert!(probe.is_hovered());
    assert_eq!(probe.widget().enters(), 1);

    panel.handle_event(&Event::PointerMoved(Vec2::new(26.0, 26.0)));
    assert_eq!(probe.widget().enters(), 1);

    panel.handle_event(&Event::PointerMoved(Vec2::new(5.0, 5.0)));
    assert!(!probe.is_hovered());
    assert_eq!(probe.widget().leaves(), 1);
}

#[test]
fn test_window_handles_event_after_descendants() {
    let ctx = Context::default();
    let window = Window::create(&ctx);
    let probe = EventProbe::create(&ctx, Size::new(50.0, 50.0));
    window.add(&probe.to_widget());
    window.set_position(Vec2::new(100.0, 100.0));

    // Title bar press: the child still sees it, translated by the window origin.
    window.handle_event(&press(110.0, 105.0));
    window.handle_event(&Event::PointerMoved(Vec2::new(150.0, 140.0)));

    assert_eq!(
        probe.widget().events(),
        vec![press(10.0, 5.0), Event::PointerMoved(Vec2::new(50.0, 40.0))]
    );
    assert_eq!(window.allocation().position(), Vec2::new(140.0, 135.0));
}

#[test]
fn test_queue_batch_dispatch() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let probe = EventProbe::create(&ctx, Size::new(5.0, 5.0));
    panel.put(&probe, Vec2::ZERO);

    let mut queue = EventQueue::new();
    queue.push(Event::PointerMoved(Vec2::new(1.0, 1.0)));
    queue.push(Event::PointerMoved(Vec2::new(2.0, 2.0)));
    queue.push(press(2.0, 2.0));
    queue.push(Event::WindowClosed);

    queue.drain().dispatch_to(&panel);

    assert_eq!(
        probe.widget().events(),
        vec![
            Event::WindowClosed,
            Event::PointerMoved(Vec2::new(2.0, 2.0)),
            press(2.0, 2.0),
        ]
    );
}

#[test]
fn test_event_deliveries_counted() {
    let ctx = Context::default();
    let panel = Panel::create(&ctx);
    let a = EventProbe::create(&ctx, Size::new(5.0, 5.0));
    let b = EventProbe::create(&ctx, Size::new(5.0, 5.0));
    panel.put(&a, Vec2::ZERO);
    panel.put(&b, Vec2::ZERO);
    ctx.metrics().reset();

    panel.handle_event(&Event::KeyReleased { code: 1 });

    assert_eq!(ctx.metrics().snapshot().event_deliveries, 3);
}
