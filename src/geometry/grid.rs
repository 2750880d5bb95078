//! Viewport grid fitting
//!
//! Sizes a square-cell grid to the space left inside a viewport after
//! margins, at a zoom level expressed as the number of visible columns. All
//! outputs are whole pixels so adjacent tiles render without sub-pixel seams.

use crate::io::configuration::{ZOOM_MAX, ZOOM_MIN};

/// Integer grid geometry produced by [`fit`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    /// Number of columns
    pub cols: u32,
    /// Number of rows
    pub rows: u32,
    /// Square cell edge in pixels
    pub cell_size_px: u32,
}

impl GridGeometry {
    /// Whether the viewport left no room to render anything
    ///
    /// Callers skip rendering instead of dividing by a zero cell size.
    pub const fn is_degenerate(&self) -> bool {
        self.cell_size_px == 0 || self.rows == 0 || self.cols == 0
    }

    /// Rendered grid width in pixels
    pub const fn width_px(&self) -> u32 {
        self.cols * self.cell_size_px
    }

    /// Rendered grid height in pixels
    pub const fn height_px(&self) -> u32 {
        self.rows * self.cell_size_px
    }
}

/// How rows are derived from the fitted column count
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// As many rows as fit the available height, at least one
    #[default]
    FillViewport,
    /// As many rows as columns
    Square,
}

/// Clamp a zoom level into the supported `[ZOOM_MIN, ZOOM_MAX]` range
pub const fn clamp_zoom(zoom_cells: u32) -> u32 {
    if zoom_cells < ZOOM_MIN {
        ZOOM_MIN
    } else if zoom_cells > ZOOM_MAX {
        ZOOM_MAX
    } else {
        zoom_cells
    }
}

/// Fit a square-cell grid into a viewport at a zoom level
///
/// The zoom level is the column count; the cell size is the largest whole
/// pixel size at which that many columns fit the available width. Guarantees
/// `cols * cell_size_px <= max(0, viewport_width - 2 * margin)` and is
/// monotonic in `zoom_cells`: more columns never enlarge the cell.
pub fn fit(
    viewport_width: f64,
    viewport_height: f64,
    margin: f64,
    zoom_cells: u32,
    mode: FitMode,
) -> GridGeometry {
    let cols = clamp_zoom(zoom_cells);
    let available_width = available(viewport_width, margin);
    let available_height = available(viewport_height, margin);

    let cell_size_px = (available_width / f64::from(cols)).floor() as u32;
    if cell_size_px == 0 {
        return GridGeometry {
            cols,
            rows: 0,
            cell_size_px: 0,
        };
    }

    let rows = match mode {
        FitMode::FillViewport => {
            let fitting = (available_height / f64::from(cell_size_px)).floor() as u32;
            fitting.max(1)
        }
        FitMode::Square => cols,
    };

    GridGeometry {
        cols,
        rows,
        cell_size_px,
    }
}

// Non-finite viewports behave as empty rather than poisoning the division
fn available(extent: f64, margin: f64) -> f64 {
    let space = extent - 2.0 * margin;
    if space.is_finite() && space > 0.0 {
        space
    } else {
        0.0
    }
}
