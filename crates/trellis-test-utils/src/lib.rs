//! Test utilities for Trellis widget trees.
//!
//! - [`RecordingTarget`] - render target recording every draw and flush
//! - [`CountingEngine`] - engine wrapper counting drawable construction
//! - [`EventProbe`] - leaf widget recording the events it receives
//! - [`metrics_theme`] - theme with explicit chrome metrics
//!
//! # Example
//!
//! ```rust
//! use trellis_test_utils::{CountingEngine, RecordingTarget};
//! use trellis_ui::{Context, Window};
//!
//! let engine = CountingEngine::default();
//! let ctx = Context::new(engine.clone());
//! let window = Window::create(&ctx);
//!
//! let mut target = RecordingTarget::new();
//! window.expose(&mut target);
//! window.expose(&mut target);
//!
//! assert_eq!(target.draw_count(), 2);
//! assert_eq!(engine.builds_for(window.id()), 1);
//! ```

mod engine;
mod probe;
mod target;

pub use engine::{CountingEngine, metrics_theme};
pub use probe::EventProbe;
pub use target::RecordingTarget;
