//! Trellis UI - retained-mode widget tree
//!
//! This crate provides the core of a retained-mode widget toolkit:
//! - Shared-ownership widget nodes with weak parent links
//! - Two-pass layout: bottom-up requisition, top-down allocation
//! - Event broadcast with per-level coordinate translation
//! - Invalidation bubbling and a per-widget render cache
//! - Windows with title bar dragging and corner resizing
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis_ui::{Context, Event, MouseButton, Spacer, ToWidget, Window};
//! use trellis_ui::{Size, Vec2};
//!
//! let ctx = Context::default();
//! let window = Window::create(&ctx);
//! window.set_title("Hello");
//! window.add(&Spacer::create(&ctx, Size::new(120.0, 80.0)).to_widget());
//!
//! // Grab the title bar and drag the window.
//! window.handle_event(&Event::PointerButtonPressed {
//!     button: MouseButton::Left,
//!     position: Vec2::new(10.0, 5.0),
//! });
//! window.handle_event(&Event::PointerMoved(Vec2::new(60.0, 45.0)));
//! assert_eq!(window.allocation().position(), Vec2::new(50.0, 40.0));
//! ```

pub mod context;
pub mod dirty;
pub mod draw_list;
pub mod error;
pub mod event;
pub mod metrics;
pub mod render;
pub mod style;
pub mod theme;
pub mod widget;
pub mod widgets;

pub use context::Context;
pub use dirty::DirtyFlags;
pub use draw_list::{Color, DrawCommand, DrawList, Drawable, QuadCommand, TextCommand};
pub use error::{ThemeError, ThemeResult};
pub use event::{Event, EventBatch, EventQueue, EventStats, MouseButton};
pub use metrics::{MetricsSnapshot, UiMetrics};
pub use render::{CullingTarget, RenderTarget};
pub use style::{BasicEngine, Engine};
pub use theme::{PropertyValue, Theme};
pub use widget::{Node, ToWidget, Widget, WidgetId, WidgetPtr};
pub use widgets::{Bin, Interaction, Panel, Spacer, Window, WindowStyle};

// Re-export core types
pub use trellis_core::geometry::{Rect, Size};
pub use trellis_core::math::Vec2;
