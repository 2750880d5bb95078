//! Scanline progress display for mockup rendering
//!
//! Warping a grid onto a large scene photo samples every destination pixel,
//! which takes long enough on big canvases to warrant feedback. Small
//! renders and quiet mode skip the bar entirely.

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::MIN_SCANLINES_FOR_PROGRESS;

static SCANLINE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("Warping [{bar:40.cyan/blue}] {pos}/{len} rows")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress reporter for one mockup render
pub struct RenderProgress {
    bar: Option<ProgressBar>,
}

impl RenderProgress {
    /// Create a reporter for a scene of `scanlines` rows
    pub fn new(scanlines: u32, quiet: bool) -> Self {
        let bar = (!quiet && scanlines >= MIN_SCANLINES_FOR_PROGRESS).then(|| {
            let bar = ProgressBar::new(u64::from(scanlines));
            bar.set_style(SCANLINE_STYLE.clone());
            bar
        });
        Self { bar }
    }

    /// Silent reporter for library callers
    pub const fn disabled() -> Self {
        Self { bar: None }
    }

    /// Mark one scanline as rendered
    pub fn scanline_done(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clear the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
