//! Command-line interface for previewing patterns and mockups

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::geometry::grid::{FitMode, GridGeometry, fit};
use crate::geometry::homography::solve;
use crate::geometry::quad::Quad;
use crate::io::configuration::{
    DEFAULT_MARGIN, DEFAULT_SEED, DEFAULT_VARIANT_COUNT, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH, DEFAULT_ZOOM, OUTPUT_SUFFIX,
};
use crate::io::definitions::{find_pattern, load_patterns};
use crate::io::error::{Result, invalid_definition};
use crate::io::preview::{render_flat, render_mockup, save_png, variant_palette};
use crate::io::progress::RenderProgress;
use crate::math::random::SeededRandom;
use crate::pattern::builtin::stock_catalog;
use crate::pattern::definition::Pattern;
use crate::pattern::resolver::{resolve_grid, resolve_range};

#[derive(Parser)]
#[command(name = "calepin")]
#[command(
    author,
    version,
    about = "Preview repeating tile patterns and perspective mockups"
)]
/// Command-line arguments for the configurator preview tool
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a flat color-block preview of a resolved pattern grid
    Preview(PreviewArgs),
    /// Warp a resolved pattern grid onto a scene quad
    Mockup(MockupArgs),
    /// Print the resolved cell stream for a rectangular range
    Cells(CellsArgs),
}

/// Pattern selection and resolution arguments shared by all commands
#[derive(Args)]
struct PatternArgs {
    /// Pattern definition JSON file (stock catalog when omitted)
    #[arg(short = 'f', long)]
    patterns: Option<PathBuf>,

    /// Pattern id to resolve
    #[arg(short = 'p', long, default_value = "damier_2")]
    pattern_id: String,

    /// Number of available tile variants
    #[arg(short = 'n', long, default_value_t = DEFAULT_VARIANT_COUNT)]
    variants: usize,

    /// Random seed for "any"/"random" selectors
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

impl PatternArgs {
    fn load(&self) -> Result<Vec<Pattern>> {
        self.patterns
            .as_deref()
            .map_or_else(|| Ok(stock_catalog()), load_patterns)
    }
}

/// Viewport and zoom arguments shared by the rendering commands
#[derive(Args)]
struct ViewportArgs {
    /// Viewport width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    viewport_width: f64,

    /// Viewport height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    viewport_height: f64,

    /// Margin around the grid in pixels
    #[arg(short, long, default_value_t = DEFAULT_MARGIN)]
    margin: f64,

    /// Zoom level: number of visible columns, clamped to the supported range
    #[arg(short, long, default_value_t = DEFAULT_ZOOM)]
    zoom: u32,

    /// Fit a square grid instead of filling the viewport height
    #[arg(long)]
    square: bool,
}

impl ViewportArgs {
    fn fit(&self) -> GridGeometry {
        let mode = if self.square {
            FitMode::Square
        } else {
            FitMode::FillViewport
        };
        fit(
            self.viewport_width,
            self.viewport_height,
            self.margin,
            self.zoom,
            mode,
        )
    }
}

#[derive(Args)]
struct PreviewArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Output PNG path (defaults to `<pattern-id>_preview.png`)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Args)]
struct MockupArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Scene width in pixels
    #[arg(long)]
    scene_width: u32,

    /// Scene height in pixels
    #[arg(long)]
    scene_height: u32,

    /// Destination corners `x0,y0,x1,y1,x2,y2,x3,y3`, clockwise from top-left
    #[arg(short, long)]
    corners: String,

    /// Interpret corners as percentages of the scene instead of pixels
    #[arg(long)]
    percent: bool,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,

    /// Output PNG path (defaults to `<pattern-id>_mockup.png`)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Args)]
struct CellsArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    /// First row of the range (inclusive, may be negative)
    #[arg(long, default_value_t = 0)]
    row_start: i64,

    /// Last row of the range (exclusive)
    #[arg(long, default_value_t = 4)]
    row_end: i64,

    /// First column of the range (inclusive, may be negative)
    #[arg(long, default_value_t = 0)]
    col_start: i64,

    /// Last column of the range (exclusive)
    #[arg(long, default_value_t = 8)]
    col_end: i64,
}

fn parse_corners(input: &str) -> Result<[[f64; 2]; 4]> {
    let values: Vec<f64> = input
        .split(',')
        .map(str::trim)
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .map_err(|_parse_error| {
            invalid_definition("corners must be eight comma-separated numbers")
        })?;
    let [x0, y0, x1, y1, x2, y2, x3, y3] = values.as_slice() else {
        return Err(invalid_definition(
            "corners must list exactly four x,y pairs",
        ));
    };
    Ok([[*x0, *y0], [*x1, *y1], [*x2, *y2], [*x3, *y3]])
}

impl Cli {
    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if definitions fail to load, the pattern id is
    /// unknown, or output cannot be written.
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Preview(args) => run_preview(&args),
            Command::Mockup(args) => run_mockup(&args),
            Command::Cells(args) => run_cells(&args),
        }
    }
}

// Allow print for user feedback on degraded rendering paths
#[allow(clippy::print_stderr)]
fn run_preview(args: &PreviewArgs) -> Result<()> {
    let patterns = args.pattern.load()?;
    let pattern = find_pattern(&patterns, &args.pattern.pattern_id)?;

    let geometry = args.viewport.fit();
    if geometry.is_degenerate() {
        eprintln!("Viewport leaves no room to render; nothing written");
        return Ok(());
    }

    let mut random = SeededRandom::new(args.pattern.seed);
    let assignments = resolve_grid(
        pattern,
        geometry.rows,
        geometry.cols,
        args.pattern.variants,
        &mut random,
    );
    let palette = variant_palette(args.pattern.variants);
    let img = render_flat(&assignments, geometry.cell_size_px, &palette);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| format!("{}{OUTPUT_SUFFIX}.png", pattern.id()));
    save_png(&img, &output)
}

#[allow(clippy::print_stderr)]
fn run_mockup(args: &MockupArgs) -> Result<()> {
    let patterns = args.pattern.load()?;
    let pattern = find_pattern(&patterns, &args.pattern.pattern_id)?;

    let geometry = args.viewport.fit();
    if geometry.is_degenerate() {
        eprintln!("Viewport leaves no room to render; nothing written");
        return Ok(());
    }

    let mut random = SeededRandom::new(args.pattern.seed);
    let assignments = resolve_grid(
        pattern,
        geometry.rows,
        geometry.cols,
        args.pattern.variants,
        &mut random,
    );
    let palette = variant_palette(args.pattern.variants);
    let flat = render_flat(&assignments, geometry.cell_size_px, &palette);

    let corners = parse_corners(&args.corners)?;
    let quad = if args.percent {
        Quad::from_percent(
            corners,
            f64::from(args.scene_width),
            f64::from(args.scene_height),
        )?
    } else {
        Quad::from_pixels(corners)?
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| format!("{}_mockup.png", pattern.id()));

    // A degenerate quad degrades to the flat, unwarped rendering
    match solve(f64::from(flat.width()), f64::from(flat.height()), &quad) {
        Ok(transform) => {
            let progress = RenderProgress::new(args.scene_height, args.quiet);
            let warped = render_mockup(
                &flat,
                args.scene_width,
                args.scene_height,
                &transform,
                &progress,
            )?;
            save_png(&warped, &output)
        }
        Err(error) => {
            eprintln!("{error}; writing the flat grid instead");
            save_png(&flat, &output)
        }
    }
}

// Allow print as the resolved stream is the command's output
#[allow(clippy::print_stdout)]
fn run_cells(args: &CellsArgs) -> Result<()> {
    let patterns = args.pattern.load()?;
    let pattern = find_pattern(&patterns, &args.pattern.pattern_id)?;

    let mut random = SeededRandom::new(args.pattern.seed);
    let stream = resolve_range(
        pattern,
        args.row_start..args.row_end,
        args.col_start..args.col_end,
        args.pattern.variants,
        &mut random,
    );

    for cell in stream {
        println!(
            "{}\t{}\t{}\t{}",
            cell.row,
            cell.col,
            cell.variant_index + 1,
            cell.rotation.degrees()
        );
    }
    Ok(())
}
