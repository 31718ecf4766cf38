#![forbid(unsafe_code)]

//! Corbel: adaptive placement for floating overlay panels.
//!
//! # Role
//! `corbel` decides where a popover, tooltip, or menu panel goes relative to
//! an anchor rectangle: it prefers the requested side, flips to the opposite
//! side when the viewport runs out of room there, and clamps the panel so it
//! does not visually exit the viewport.
//!
//! # Primary responsibilities
//! - **[`compute_placement`]**: the whole engine, one pure call from
//!   `(anchor, viewport, options)` to `(x, y, effective side)`.
//! - **[`PlacementOptions`]**: panel dimensions, edge margin, and requested
//!   side, with documented defaults and builder setters.
//! - **[`validate_inputs`]**: opt-in pre-flight for callers that need the
//!   strict stays-on-screen guarantee.
//!
//! # How it fits in the system
//! Element measurement supplies the anchor rectangle and viewport size as
//! plain numbers; the rendering layer consumes the returned coordinates and
//! effective side (for example to mirror an arrow indicator after a flip).
//! The engine holds no state and performs no I/O, so it can be called from
//! any thread on every relayout.

pub mod placement;
pub mod validate;

pub use corbel_core::{Rect, Viewport};
pub use placement::{
    ANCHOR_GAP, ANCHOR_TOP_OFFSET, Axis, Placement, PlacementOptions, PlacementResult,
    compute_placement,
};
pub use validate::{PlacementInputError, validate_inputs};
