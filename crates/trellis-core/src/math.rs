//! Math re-exports.
//!
//! Widget positions, pointer coordinates and drag offsets use the
//! SIMD-friendly [`glam`] vector types.
//!
//! ```
//! use trellis_core::math::Vec2;
//!
//! let pointer = Vec2::new(110.0, 105.0);
//! let origin = Vec2::new(100.0, 100.0);
//! assert_eq!(pointer - origin, Vec2::new(10.0, 5.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;
