//! Trellis Core
//!
//! Geometry, math, logging, profiling and configuration shared by the
//! Trellis widget toolkit crates.

pub mod alloc;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
