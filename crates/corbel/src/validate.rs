#![forbid(unsafe_code)]

//! Opt-in pre-flight checks for placement inputs.
//!
//! [`compute_placement`](crate::placement::compute_placement) never
//! validates; malformed values flow through its arithmetic and produce a
//! degraded but well-defined result. Callers that need the strict
//! stays-on-screen guarantee run [`validate_inputs`] first and refuse (or
//! repair) rejected scenes.
//!
//! Validation collects every violation rather than stopping at the first,
//! so a caller can report a whole malformed scene in one pass.

use std::fmt;

use corbel_core::{Rect, Viewport};

use crate::placement::PlacementOptions;

/// A single rejected input value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementInputError {
    /// Name of the offending field.
    pub field: &'static str,
    /// The rejected value, rendered for display.
    pub value: String,
    /// The violated constraint.
    pub message: String,
}

impl PlacementInputError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for PlacementInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for PlacementInputError {}

/// Check a placement scene against the engine's input contract and return
/// all violations.
///
/// Field checks: anchor coordinates and dimensions finite and
/// non-negative, viewport and panel dimensions finite and positive, margin
/// finite and non-negative. When every field passes, the capacity checks
/// require the viewport to hold the panel plus a margin band on each axis;
/// that is the precondition under which the engine keeps the panel fully
/// on-screen.
pub fn validate_inputs(
    anchor: Rect,
    viewport: Viewport,
    options: &PlacementOptions,
) -> Result<(), Vec<PlacementInputError>> {
    let mut errors = Vec::new();

    check_finite_non_negative("anchor.x", anchor.x, &mut errors);
    check_finite_non_negative("anchor.y", anchor.y, &mut errors);
    check_finite_non_negative("anchor.width", anchor.width, &mut errors);
    check_finite_non_negative("anchor.height", anchor.height, &mut errors);
    check_finite_positive("viewport.width", viewport.width, &mut errors);
    check_finite_positive("viewport.height", viewport.height, &mut errors);
    check_finite_positive("panel_width", options.panel_width, &mut errors);
    check_finite_positive("panel_height", options.panel_height, &mut errors);
    check_finite_non_negative("margin", options.margin, &mut errors);

    // Capacity comparisons are only meaningful over validated scalars.
    if errors.is_empty() {
        if viewport.width < options.panel_width + 2.0 * options.margin {
            errors.push(PlacementInputError::new(
                "viewport.width",
                viewport.width.to_string(),
                "must be >= panel_width + 2 * margin",
            ));
        }
        if viewport.height < options.panel_height + 2.0 * options.margin {
            errors.push(PlacementInputError::new(
                "viewport.height",
                viewport.height.to_string(),
                "must be >= panel_height + 2 * margin",
            ));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_finite_non_negative(
    field: &'static str,
    value: f64,
    errors: &mut Vec<PlacementInputError>,
) {
    if !value.is_finite() {
        errors.push(PlacementInputError::new(
            field,
            value.to_string(),
            "must be finite",
        ));
    } else if value < 0.0 {
        errors.push(PlacementInputError::new(
            field,
            value.to_string(),
            "must be >= 0",
        ));
    }
}

fn check_finite_positive(field: &'static str, value: f64, errors: &mut Vec<PlacementInputError>) {
    if !value.is_finite() {
        errors.push(PlacementInputError::new(
            field,
            value.to_string(),
            "must be finite",
        ));
    } else if value <= 0.0 {
        errors.push(PlacementInputError::new(
            field,
            value.to_string(),
            "must be > 0",
        ));
    }
}
