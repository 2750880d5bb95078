//! Deterministic core for tile-pattern configurators: periodic pattern
//! resolution, planar perspective solving and viewport grid fitting.
//!
//! The crate computes which tile variant and rotation belongs in every cell of
//! an infinite repeating pattern, the projective transform warping a rendered
//! grid onto a photographed surface, and the integer grid geometry filling a
//! viewport at a given zoom level. Zone color assignment and nearest-swatch
//! matching round out the set. Rendering of actual tile artwork, asset
//! fetching and UI state live in the host layer.

#![forbid(unsafe_code)]

/// Zone color assignment, swatch catalog and color value parsing
pub mod color;
/// Quadrilaterals, homography solving and viewport grid fitting
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities including the injectable random source
pub mod math;
/// Pattern definitions and the periodic cell resolver
pub mod pattern;

pub use io::error::{ConfiguratorError, Result};
