#![forbid(unsafe_code)]

//! Adaptive placement of a floating panel relative to an anchor rectangle.
//!
//! Placement runs as one synchronous pass: the requested side picks the
//! primary-axis path, the fallback selector settles the primary coordinate
//! and the effective side, the cross-axis coordinate is centered on (or
//! pinned near) the anchor, and the clamper bounds it to the margin band.
//! No step reads back from a later one.
//!
//! # Invariants
//!
//! 1. Pure coordinate transform: equal inputs produce bit-identical results
//!    and nothing is read from or written to the environment.
//! 2. The effective side always lies on the requested side's axis; a flip
//!    swaps side, never axis.
//! 3. The cross-axis coordinate is always clamped to
//!    `[margin, viewport - panel - margin]`.
//! 4. Horizontal placements have a third, forced stage when neither side
//!    fits; vertical placements flip at most once and are never forced.
//!
//! # Example
//!
//! ```
//! use corbel::{Placement, PlacementOptions, Rect, Viewport, compute_placement};
//!
//! let anchor = Rect::new(100.0, 100.0, 50.0, 20.0);
//! let viewport = Viewport::new(1200.0, 800.0);
//! let result = compute_placement(anchor, viewport, PlacementOptions::default());
//!
//! assert_eq!(result.x, 158.0); // anchor right edge + gap
//! assert_eq!(result.y, 90.0); // anchor top - vertical offset
//! assert_eq!(result.placement, Placement::Right);
//! ```

use corbel_core::{Rect, Viewport};
use serde::{Deserialize, Serialize};

/// Fixed gap between the anchor edge and the near panel edge, in pixels.
///
/// Independent of [`PlacementOptions::margin`], which bounds the distance
/// between the panel and the viewport edge instead.
pub const ANCHOR_GAP: f64 = 8.0;

/// Upward offset of the panel top relative to the anchor top, applied to
/// horizontal placements, in pixels.
pub const ANCHOR_TOP_OFFSET: f64 = 10.0;

/// The side of the anchor a panel is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Panel sits to the left of the anchor.
    Left,
    /// Panel sits to the right of the anchor (the default).
    #[default]
    Right,
    /// Panel sits above the anchor.
    Top,
    /// Panel sits below the anchor.
    Bottom,
}

impl Placement {
    /// Stable lowercase label; matches the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// The axis the panel is offset along for this side.
    #[inline]
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }

    /// The opposite side, i.e. the fallback candidate.
    #[inline]
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Whether the panel is offset along the horizontal axis.
    #[inline]
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Whether the panel is offset along the vertical axis.
    #[inline]
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Primary axis of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Panel offset left/right of the anchor; the cross axis is vertical.
    Horizontal,
    /// Panel offset above/below the anchor; the cross axis is horizontal.
    Vertical,
}

/// Placement configuration.
///
/// Every field is optional from the caller's point of view: start from
/// [`PlacementOptions::default`] and override what differs, either through
/// the builder setters or by deserializing a partial document (missing
/// fields take their defaults independently).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementOptions {
    /// Panel width in pixels (default: 380).
    pub panel_width: f64,
    /// Panel height in pixels (default: 500).
    pub panel_height: f64,
    /// Minimum distance between the panel and the viewport edge
    /// (default: 20).
    pub margin: f64,
    /// Requested side before fallback (default: [`Placement::Right`]).
    pub preferred: Placement,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            panel_width: 380.0,
            panel_height: 500.0,
            margin: 20.0,
            preferred: Placement::Right,
        }
    }
}

impl PlacementOptions {
    /// Create options with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel width.
    #[must_use]
    pub fn panel_width(mut self, width: f64) -> Self {
        self.panel_width = width;
        self
    }

    /// Set the panel height.
    #[must_use]
    pub fn panel_height(mut self, height: f64) -> Self {
        self.panel_height = height;
        self
    }

    /// Set the minimum panel-to-viewport-edge distance.
    #[must_use]
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the requested side.
    #[must_use]
    pub fn preferred(mut self, placement: Placement) -> Self {
        self.preferred = placement;
        self
    }
}

/// Where the panel goes: viewport-relative top-left corner plus the
/// effective side after fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult {
    /// Panel left edge.
    pub x: f64,
    /// Panel top edge.
    pub y: f64,
    /// Effective side. May differ from the requested side; the difference
    /// is the fallback signal (e.g. for mirroring an arrow indicator).
    pub placement: Placement,
}

impl PlacementResult {
    /// The full panel rectangle at the computed position.
    #[must_use]
    pub fn panel_rect(&self, options: &PlacementOptions) -> Rect {
        Rect::new(self.x, self.y, options.panel_width, options.panel_height)
    }

    /// Whether the engine settled on a side other than the requested one.
    #[inline]
    #[must_use]
    pub fn fell_back(&self, requested: Placement) -> bool {
        self.placement != requested
    }
}

/// Compute where a floating panel goes relative to `anchor` inside
/// `viewport`.
///
/// The requested side is tried first. When the panel would cross the margin
/// band on that side, the opposite side is tried; for horizontal placements
/// a third stage forces the coordinate inside the band when neither side
/// fits, reporting the requested side. Vertical placements flip at most
/// once: when neither vertical side has room, the flipped coordinate is
/// kept as-is and may extend past the top margin.
///
/// No validation happens here. Non-finite or out-of-contract inputs flow
/// through the arithmetic and yield a degraded but well-defined result; run
/// [`validate_inputs`](crate::validate::validate_inputs) first when the
/// strict stays-on-screen guarantee matters.
#[must_use]
pub fn compute_placement(
    anchor: Rect,
    viewport: Viewport,
    options: PlacementOptions,
) -> PlacementResult {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "compute_placement",
        preferred = options.preferred.as_str(),
        anchor_x = anchor.x,
        anchor_y = anchor.y,
        viewport_w = viewport.width,
        viewport_h = viewport.height,
    )
    .entered();

    let result = match options.preferred.axis() {
        Axis::Horizontal => place_horizontal(anchor, viewport, &options),
        Axis::Vertical => place_vertical(anchor, viewport, &options),
    };

    #[cfg(feature = "tracing")]
    if result.fell_back(options.preferred) {
        tracing::trace!(
            requested = options.preferred.as_str(),
            effective = result.placement.as_str(),
            "requested side lacked room"
        );
    }

    result
}

/// Horizontal primary axis: settle `x` and the effective side, then clamp
/// `y` near the anchor top.
fn place_horizontal(anchor: Rect, viewport: Viewport, opts: &PlacementOptions) -> PlacementResult {
    debug_assert!(opts.preferred.is_horizontal());

    let (x, placement) = if opts.preferred == Placement::Left {
        let left_x = anchor.x - opts.panel_width - ANCHOR_GAP;
        if left_x < opts.margin {
            // No room on the left; try the right side.
            let right_x = anchor.right() + ANCHOR_GAP;
            if right_x + opts.panel_width > viewport.width - opts.margin {
                // Neither side fits: pin to the far band edge and keep the
                // requested side as the label.
                (
                    viewport.width - opts.panel_width - opts.margin,
                    Placement::Left,
                )
            } else {
                (right_x, Placement::Right)
            }
        } else {
            (left_x, Placement::Left)
        }
    } else {
        let right_x = anchor.right() + ANCHOR_GAP;
        if right_x + opts.panel_width > viewport.width - opts.margin {
            // No room on the right; try the left side.
            let left_x = anchor.x - opts.panel_width - ANCHOR_GAP;
            if left_x < opts.margin {
                // Neither side fits: pin to the near band edge and keep the
                // requested side as the label.
                (opts.margin, Placement::Right)
            } else {
                (left_x, Placement::Left)
            }
        } else {
            (right_x, Placement::Right)
        }
    };

    let y = clamp_axis(
        anchor.y - ANCHOR_TOP_OFFSET,
        opts.panel_height,
        viewport.height,
        opts.margin,
    );

    PlacementResult { x, y, placement }
}

/// Vertical primary axis: settle `y` and the effective side, then center
/// and clamp `x` on the anchor.
fn place_vertical(anchor: Rect, viewport: Viewport, opts: &PlacementOptions) -> PlacementResult {
    debug_assert!(opts.preferred.is_vertical());

    let (y, placement) = if opts.preferred == Placement::Top {
        let top_y = anchor.y - opts.panel_height - ANCHOR_GAP;
        if top_y < opts.margin {
            // No room above; flip below with no further fitness check.
            (anchor.bottom() + ANCHOR_GAP, Placement::Bottom)
        } else {
            (top_y, Placement::Top)
        }
    } else {
        let bottom_y = anchor.bottom() + ANCHOR_GAP;
        if bottom_y + opts.panel_height > viewport.height - opts.margin {
            // No room below; flip above with no further fitness check.
            (anchor.y - opts.panel_height - ANCHOR_GAP, Placement::Top)
        } else {
            (bottom_y, Placement::Bottom)
        }
    };

    let x = clamp_axis(
        anchor.x + (anchor.width - opts.panel_width) / 2.0,
        opts.panel_width,
        viewport.width,
        opts.margin,
    );

    PlacementResult { x, y, placement }
}

/// Clamp a cross-axis coordinate into `[margin, limit - extent - margin]`.
///
/// The far edge is checked first and exactly one correction applies. With a
/// degenerate band (`extent + 2 * margin > limit`) the result can sit
/// outside the visible range; that is the documented input contract.
#[inline]
fn clamp_axis(value: f64, extent: f64, limit: f64, margin: f64) -> f64 {
    if value + extent > limit - margin {
        limit - extent - margin
    } else if value < margin {
        margin
    } else {
        value
    }
}
