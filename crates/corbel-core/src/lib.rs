#![forbid(unsafe_code)]

//! Geometry types for Corbel overlay placement.
//!
//! This crate provides:
//! - [`Rect`] for anchor rectangles in viewport-relative pixel space
//! - [`Viewport`] for the visible area a floating panel must stay inside
//!
//! All coordinates are `f64` pixels with the origin at the viewport's
//! top-left corner, `x` growing rightward and `y` growing downward. Values
//! arrive from live element measurement and are carried as-is; nothing in
//! this crate validates or normalizes them.

/// Rectangles and viewport sizes in pixel space.
pub mod geometry;

pub use geometry::{Rect, Viewport};
