//! Destination quadrilaterals
//!
//! Mockup scenes declare the target surface as four corners, clockwise from
//! the top-left. Corner data arrives either directly in scene pixels or
//! normalized against the scene dimensions (0..1, or 0..100 in the original
//! data files).

use crate::io::error::{Result, invalid_definition};

/// Four corners `[top_left, top_right, bottom_right, bottom_left]` in pixels
///
/// Ordering is significant and fixed: clockwise from the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    points: [[f64; 2]; 4],
}

impl Quad {
    /// Build a quad from pixel-space corners
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is not finite.
    pub fn from_pixels(points: [[f64; 2]; 4]) -> Result<Self> {
        for (index, point) in points.iter().enumerate() {
            if !point[0].is_finite() || !point[1].is_finite() {
                return Err(invalid_definition(format!(
                    "quad corner {index} is not finite"
                )));
            }
        }
        Ok(Self { points })
    }

    /// Build a quad from corners normalized to `0..1` of a reference frame
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate or frame dimension is not finite.
    pub fn from_normalized(
        points: [[f64; 2]; 4],
        frame_width: f64,
        frame_height: f64,
    ) -> Result<Self> {
        if !frame_width.is_finite() || !frame_height.is_finite() {
            return Err(invalid_definition("quad reference frame is not finite"));
        }
        let scaled = points.map(|[x, y]| [x * frame_width, y * frame_height]);
        Self::from_pixels(scaled)
    }

    /// Build a quad from corners expressed as percentages of a reference frame
    ///
    /// The original mockup data stores corners in `0..100` of the scene photo.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate or frame dimension is not finite.
    pub fn from_percent(
        points: [[f64; 2]; 4],
        frame_width: f64,
        frame_height: f64,
    ) -> Result<Self> {
        let normalized = points.map(|[x, y]| [x / 100.0, y / 100.0]);
        Self::from_normalized(normalized, frame_width, frame_height)
    }

    /// Corner coordinates in pixels, clockwise from the top-left
    pub const fn points(&self) -> [[f64; 2]; 4] {
        self.points
    }
}
