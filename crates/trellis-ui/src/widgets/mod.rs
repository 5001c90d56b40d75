//! Concrete widget kinds.
//!
//! - [`Bin`] - generic single-child container
//! - [`Window`] - top-level bin with chrome and drag/resize interaction
//! - [`Panel`] - many-child container with free positioning
//! - [`Spacer`] - leaf with a fixed minimum size

mod bin;
mod panel;
mod spacer;
mod window;

pub use bin::Bin;
pub use panel::Panel;
pub use spacer::Spacer;
pub use window::{Interaction, Window, WindowStyle};
