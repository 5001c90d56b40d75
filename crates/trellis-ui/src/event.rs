//! Input events consumed by the widget tree and the queue that batches them.

use std::collections::VecDeque;

use trellis_core::geometry::Size;
use trellis_core::math::Vec2;
use trellis_core::profiling::profile_function;

use crate::widget::Node;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Raw input event as produced by the windowing layer.
///
/// Pointer positions are expressed in the coordinate space of whoever the
/// event is currently delivered to; containers translate them before
/// forwarding to their children.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PointerMoved(Vec2),
    PointerButtonPressed { button: MouseButton, position: Vec2 },
    PointerButtonReleased { button: MouseButton, position: Vec2 },
    /// Pointer left the host window.
    PointerLeft,
    KeyPressed { code: u32 },
    KeyReleased { code: u32 },
    TextEntered(char),
    WindowResized(Size<f32>),
    WindowClosed,
}

impl Event {
    /// Pointer position carried by the event, if any.
    pub fn pointer_position(&self) -> Option<Vec2> {
        match self {
            Event::PointerMoved(position)
            | Event::PointerButtonPressed { position, .. }
            | Event::PointerButtonReleased { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Copy of the event with pointer coordinates made relative to `origin`.
    ///
    /// Events without a pointer position are returned unchanged.
    pub fn to_local(&self, origin: Vec2) -> Event {
        match self {
            Event::PointerMoved(position) => Event::PointerMoved(*position - origin),
            Event::PointerButtonPressed { button, position } => Event::PointerButtonPressed {
                button: *button,
                position: *position - origin,
            },
            Event::PointerButtonReleased { button, position } => Event::PointerButtonReleased {
                button: *button,
                position: *position - origin,
            },
            other => other.clone(),
        }
    }
}

/// Event queue with batching and pointer-move coalescing.
pub struct EventQueue {
    /// Pending events for this frame
    pending: VecDeque<Event>,

    /// High-priority events (processed first)
    priority: VecDeque<Event>,

    stats: EventStats,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(64),
            priority: VecDeque::with_capacity(8),
            stats: EventStats::default(),
        }
    }

    /// Push an event coming from the windowing layer.
    ///
    /// A pointer move directly following another pointer move replaces it,
    /// so button presses and releases keep their position in the stream.
    pub fn push(&mut self, event: Event) {
        self.stats.events_received += 1;

        match event {
            Event::WindowClosed | Event::WindowResized(_) => {
                self.priority.push_back(event);
            }
            Event::PointerMoved(_) => {
                match self.pending.back_mut() {
                    Some(last) if matches!(last, Event::PointerMoved(_)) => {
                        *last = event;
                        self.stats.events_coalesced += 1;
                    }
                    _ => self.pending.push_back(event),
                }
            }
            _ => {
                self.pending.push_back(event);
            }
        }
    }

    /// Take every queued event, priority events first.
    pub fn drain(&mut self) -> EventBatch {
        let mut events = Vec::with_capacity(self.priority.len() + self.pending.len());
        events.extend(self.priority.drain(..));
        events.extend(self.pending.drain(..));

        self.stats.events_processed += events.len();

        EventBatch { events }
    }

    pub fn stats(&self) -> &EventStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = EventStats::default();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Events drained from an [`EventQueue`] for one frame.
pub struct EventBatch {
    events: Vec<Event>,
}

impl EventBatch {
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Deliver every event, in order, to `root`.
    pub fn dispatch_to(&self, root: &Node) {
        profile_function!();
        for event in &self.events {
            root.handle_event(event);
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct EventStats {
    pub events_received: usize,
    pub events_processed: usize,
    pub events_coalesced: usize,
}
