//! Zone color assignment, swatch catalog and color value parsing
//!
//! This module contains color-related functionality including:
//! - Hex, `rgb()` and named color parsing with a single normal form
//! - The ordered swatch catalog with nearest-color matching
//! - The per-zone color store consulted by rendering and export

/// Color value parsing and normalization
pub mod parse;
/// Per-zone color assignment
pub mod store;
/// Swatch catalog reference data
pub mod swatch;

pub use parse::Rgb;
pub use store::ZoneColorStore;
pub use swatch::{Swatch, SwatchCatalog};
