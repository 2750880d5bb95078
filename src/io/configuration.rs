//! Tunable constants and runtime configuration defaults

// Zoom is expressed as the number of columns visible in the viewport
/// Minimum zoom level (fewest visible columns)
pub const ZOOM_MIN: u32 = 2;
/// Maximum zoom level (most visible columns)
pub const ZOOM_MAX: u32 = 20;
/// Default zoom level for the CLI
pub const DEFAULT_ZOOM: u32 = 6;

// Homography solver tolerances
/// Absolute pivot threshold below which the system is singular
pub const PIVOT_EPS_ABS: f64 = 1e-12;
/// Pivot threshold relative to the largest magnitude in the column
pub const PIVOT_EPS_REL: f64 = 1e-10;
/// Projective coefficients below this magnitude collapse to an affine encoding
pub const PROJECTIVE_EPS: f64 = 1e-9;
/// Largest coefficient magnitude accepted as a sane solution
pub const MAX_COEFFICIENT: f64 = 1e9;

// Host recomputation cadence. The core itself is synchronous and idempotent;
// these are the debounce intervals the original viewer applies before calling in.
/// Recommended delay after the last viewport resize event
pub const RESIZE_DEBOUNCE_MS: u64 = 150;
/// Recommended throttle between rapid zoom-wheel recomputations
pub const ZOOM_THROTTLE_MS: u64 = 120;

// Default values for configurable CLI parameters
/// Fixed seed for reproducible resolution
pub const DEFAULT_SEED: u64 = 42;
/// Default viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
/// Default viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;
/// Default viewport margin in pixels
pub const DEFAULT_MARGIN: f64 = 24.0;
/// Default variant count when no collection is supplied
pub const DEFAULT_VARIANT_COUNT: usize = 4;

// Output settings
/// Suffix added to preview output filenames
pub const OUTPUT_SUFFIX: &str = "_preview";
/// Fraction of the cell edge covered by the rotation marker
pub const ROTATION_MARKER_FRACTION: f64 = 0.25;

// Progress display
/// Scene heights below this render fast enough to skip the progress bar
pub const MIN_SCANLINES_FOR_PROGRESS: u32 = 256;
