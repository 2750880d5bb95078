//! Input/output operations: error taxonomy, tunable constants, definition
//! loading, CLI plumbing and PNG preview rendering

/// Command-line interface for previewing patterns and mockups
pub mod cli;
/// Tunable constants and runtime defaults
pub mod configuration;
/// JSON definition loading for patterns and swatch catalogs
pub mod definitions;
/// Error types for configurator operations
pub mod error;
/// Flat preview and warped mockup rendering to PNG
pub mod preview;
/// Scanline progress display for mockup rendering
pub mod progress;
