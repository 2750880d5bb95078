//! Geometry for mockup warping and viewport layout
//!
//! This module contains geometry-related functionality including:
//! - Destination quadrilaterals in pixel, normalized and percent frames
//! - The 8-DOF homography solver and its transform encodings
//! - Integer grid fitting under viewport, margin and zoom constraints

/// Viewport grid fitting
pub mod grid;
/// Projective transform solving and encoding
pub mod homography;
/// Destination quadrilaterals
pub mod quad;

pub use grid::{FitMode, GridGeometry, clamp_zoom, fit};
pub use homography::{Transform, solve};
pub use quad::Quad;
