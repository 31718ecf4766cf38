#![forbid(unsafe_code)]

//! Screen-space geometry primitives.
//!
//! A [`Rect`] is described by its top-left corner plus extents, the shape
//! element measurement reports. Edge and center positions are derived
//! through accessors so the two representations cannot drift apart.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in viewport-relative pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extents.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center.
    #[inline]
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center.
    #[inline]
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Whether the rectangle covers no area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// The rectangle shrunk by `amount` on every side.
    ///
    /// A negative `amount` grows the rectangle instead. Extents may go
    /// negative when `amount` exceeds half the extent; [`Rect::is_empty`]
    /// reports such results as empty.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: self.width - 2.0 * amount,
            height: self.height - 2.0 * amount,
        }
    }

    /// Whether `other` lies entirely inside this rectangle (edges may
    /// touch).
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// The visible area a floating panel must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Full width in pixels.
    pub width: f64,
    /// Full height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport from its dimensions.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The viewport as a rectangle anchored at the origin.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Rect accessors ────────────────────────────────────────────────

    #[test]
    fn edges_derive_from_origin_and_extents() {
        let r = Rect::new(100.0, 100.0, 50.0, 20.0);
        assert_eq!(r.right(), 150.0);
        assert_eq!(r.bottom(), 120.0);
        assert_eq!(r.center_x(), 125.0);
        assert_eq!(r.center_y(), 110.0);
    }

    #[test]
    fn empty_when_either_extent_is_zero_or_negative() {
        assert!(Rect::new(10.0, 10.0, 0.0, 5.0).is_empty());
        assert!(Rect::new(10.0, 10.0, 5.0, -1.0).is_empty());
        assert!(!Rect::new(10.0, 10.0, 5.0, 5.0).is_empty());
    }

    // ── Inset and containment ─────────────────────────────────────────

    #[test]
    fn inset_shrinks_every_side() {
        let r = Rect::new(0.0, 0.0, 100.0, 80.0).inset(20.0);
        assert_eq!(r, Rect::new(20.0, 20.0, 60.0, 40.0));
    }

    #[test]
    fn inset_past_half_extent_goes_empty() {
        assert!(Rect::new(0.0, 0.0, 30.0, 30.0).inset(16.0).is_empty());
    }

    #[test]
    fn contains_rect_allows_touching_edges() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!outer.contains_rect(&Rect::new(90.0, 10.0, 20.0, 20.0)));
        assert!(!outer.contains_rect(&Rect::new(-1.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn viewport_bounds_sit_at_origin() {
        let v = Viewport::new(1200.0, 800.0);
        assert_eq!(v.bounds(), Rect::new(0.0, 0.0, 1200.0, 800.0));
    }

    // ── Serialization ─────────────────────────────────────────────────

    #[test]
    fn rect_serializes_with_measurement_field_names() {
        let json = serde_json::to_string(&Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"width":3.0,"height":4.0}"#);
    }
}
