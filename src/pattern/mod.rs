//! Pattern definitions and the periodic cell resolver
//!
//! This module contains pattern-related functionality including:
//! - Definition types mirroring the JSON data files
//! - The periodic cell-to-variant resolver
//! - Builders for the stock generated pattern families

/// Builders for the stock damier/iflip/aleatoire pattern families
pub mod builtin;
/// Pattern, cell and selector definition types
pub mod definition;
/// Periodic cell resolution
pub mod resolver;

pub use definition::{CellSpec, Pattern, PatternDefinition, Rotation, RotationSelector, TileSelector};
pub use resolver::{CellAssignment, ResolvedCell, resolve_cell, resolve_grid, resolve_range};
