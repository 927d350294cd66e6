#![forbid(unsafe_code)]

//! Core: the rect-cut primitives.
//!
//! - [`geometry::Rect`] - a mutable area that is consumed edge by edge
//! - [`side::Side`] - runtime edge selection for cut/get/add
//! - [`geometry::Insets`] - per-side shrink amounts
//! - [`logging`] - tracing macros, or no-ops without the `tracing` feature

pub mod geometry;
pub mod logging;
pub mod side;

pub use geometry::{Insets, InsetsError, Placement, Rect};
pub use side::{Axis, Side};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace};
