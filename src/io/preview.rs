//! Flat preview and warped mockup rendering to PNG
//!
//! Host-layer debugging surface over the core: each variant renders as a
//! solid color block with a darkened corner marker showing its rotation, and
//! the mockup path warps that flat grid onto a scene-sized canvas through the
//! inverse homography. Actual tile artwork never renders here.

use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;

use crate::color::parse::Rgb;
use crate::geometry::homography::Transform;
use crate::io::configuration::ROTATION_MARKER_FRACTION;
use crate::io::error::{ConfiguratorError, Result};
use crate::io::progress::RenderProgress;
use crate::pattern::definition::Rotation;
use crate::pattern::resolver::CellAssignment;

/// Deterministic, visually distinct color per variant
///
/// Golden-angle hue stepping keeps neighbors in the variant set apart even
/// for large counts.
pub fn variant_palette(variant_count: usize) -> Vec<Rgb> {
    (0..variant_count)
        .map(|index| {
            let hue = (index as f64 * 137.507_764).rem_euclid(360.0);
            hsv_to_rgb(hue, 0.55, 0.85)
        })
        .collect()
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let offset = value - chroma;
    Rgb {
        r: ((r + offset) * 255.0).round() as u8,
        g: ((g + offset) * 255.0).round() as u8,
        b: ((b + offset) * 255.0).round() as u8,
    }
}

const fn darken(color: Rgb) -> Rgba<u8> {
    Rgba([
        (color.r as u16 * 3 / 5) as u8,
        (color.g as u16 * 3 / 5) as u8,
        (color.b as u16 * 3 / 5) as u8,
        255,
    ])
}

// The marker sits in the corner the tile's top-left lands on after rotation
const fn marker_corner(rotation: Rotation) -> (bool, bool) {
    match rotation {
        Rotation::R0 => (false, false),
        Rotation::R90 => (true, false),
        Rotation::R180 => (true, true),
        Rotation::R270 => (false, true),
    }
}

/// Render resolved cell assignments as a flat color-block grid
///
/// The image is `cols * cell_size_px` by `rows * cell_size_px`; variants
/// outside the palette wrap around it.
pub fn render_flat(
    assignments: &Array2<CellAssignment>,
    cell_size_px: u32,
    palette: &[Rgb],
) -> RgbaImage {
    let (rows, cols) = assignments.dim();
    let width = cols as u32 * cell_size_px;
    let height = rows as u32 * cell_size_px;
    let mut img = ImageBuffer::new(width, height);
    if palette.is_empty() || cell_size_px == 0 {
        return img;
    }

    let marker = ((f64::from(cell_size_px) * ROTATION_MARKER_FRACTION) as u32).max(1);

    for ((row, col), assignment) in assignments.indexed_iter() {
        let color = palette[assignment.variant_index % palette.len()];
        let fill = Rgba([color.r, color.g, color.b, 255]);
        let corner_fill = darken(color);
        let (right, bottom) = marker_corner(assignment.rotation);

        let x0 = col as u32 * cell_size_px;
        let y0 = row as u32 * cell_size_px;
        for dy in 0..cell_size_px {
            for dx in 0..cell_size_px {
                let in_marker_x = if right { dx >= cell_size_px - marker } else { dx < marker };
                let in_marker_y = if bottom { dy >= cell_size_px - marker } else { dy < marker };
                let pixel = if in_marker_x && in_marker_y {
                    corner_fill
                } else {
                    fill
                };
                img.put_pixel(x0 + dx, y0 + dy, pixel);
            }
        }
    }

    img
}

/// Warp a flat grid rendering onto a scene-sized canvas
///
/// Every destination pixel maps back into the flat grid through the inverse
/// transform and samples its nearest pixel; destinations outside the grid
/// stay transparent, so the scene photo shows through when composited.
///
/// # Errors
///
/// Returns an error if the transform is not invertible.
pub fn render_mockup(
    flat: &RgbaImage,
    scene_width: u32,
    scene_height: u32,
    transform: &Transform,
    progress: &RenderProgress,
) -> Result<RgbaImage> {
    let inverse = transform.inverse3()?;
    let (grid_width, grid_height) = (f64::from(flat.width()), f64::from(flat.height()));
    let mut img = ImageBuffer::new(scene_width, scene_height);

    for y in 0..scene_height {
        for x in 0..scene_width {
            // Sample at the pixel center
            let dx = f64::from(x) + 0.5;
            let dy = f64::from(y) + 0.5;
            let sx = inverse[0][0] * dx + inverse[0][1] * dy + inverse[0][2];
            let sy = inverse[1][0] * dx + inverse[1][1] * dy + inverse[1][2];
            let sw = inverse[2][0] * dx + inverse[2][1] * dy + inverse[2][2];
            if sw.abs() < f64::EPSILON {
                continue;
            }

            let gx = sx / sw;
            let gy = sy / sw;
            if gx < 0.0 || gy < 0.0 || gx >= grid_width || gy >= grid_height {
                continue;
            }

            let pixel = *flat.get_pixel(gx as u32, gy as u32);
            img.put_pixel(x, y, pixel);
        }
        progress.scanline_done();
    }
    progress.finish();

    Ok(img)
}

/// Save a rendered image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written.
pub fn save_png(img: &RgbaImage, output_path: &str) -> Result<()> {
    if let Some(parent) = std::path::Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ConfiguratorError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| ConfiguratorError::ImageExport {
        path: output_path.into(),
        source: e,
    })
}
