//! Builders for the stock generated pattern families
//!
//! The original catalog ships three generated families per block size
//! `n ∈ [2, 16]` plus the single-cell fully random pattern. Hosts and tests
//! get the same catalog here without loading the JSON data files.

use crate::io::error::{Result, invalid_definition};
use crate::pattern::definition::{
    CellSpec, Pattern, Rotation, RotationSelector, TileSelector,
};

/// Smallest generated damier block size
pub const DAMIER_MIN: u32 = 2;
/// Largest generated damier block size
pub const DAMIER_MAX: u32 = 16;

fn damier_cells(
    n: u32,
    rot_for: impl Fn(u32, u32) -> RotationSelector,
) -> Vec<((u32, u32), CellSpec)> {
    let mut cells = Vec::with_capacity((n * n) as usize);
    for y in 0..n {
        for x in 0..n {
            // Diagonal variant cycling: tile (x + y) mod n, 1-based
            let tile = TileSelector::Fixed(((x + y) % n + 1) as usize);
            cells.push((
                (x, y),
                CellSpec {
                    tile,
                    rot: rot_for(x, y),
                },
            ));
        }
    }
    cells
}

fn check_size(n: u32) -> Result<()> {
    if (DAMIER_MIN..=DAMIER_MAX).contains(&n) {
        Ok(())
    } else {
        Err(invalid_definition(format!(
            "damier block size {n} outside [{DAMIER_MIN}, {DAMIER_MAX}]"
        )))
    }
}

/// Diagonal checkerboard cycling `n` variants, unrotated
///
/// # Errors
///
/// Returns an error if `n` is outside `[DAMIER_MIN, DAMIER_MAX]`.
pub fn damier(n: u32) -> Result<Pattern> {
    check_size(n)?;
    Pattern::new(
        format!("damier_{n}"),
        format!("Damier {n} motifs"),
        (n, n),
        damier_cells(n, |_, _| RotationSelector::Fixed(Rotation::R0)),
    )
}

/// Diagonal checkerboard with a half turn on odd-parity cells
///
/// # Errors
///
/// Returns an error if `n` is outside `[DAMIER_MIN, DAMIER_MAX]`.
pub fn damier_iflip(n: u32) -> Result<Pattern> {
    check_size(n)?;
    Pattern::new(
        format!("iflip_{n}"),
        format!("Damier iflip {n} motifs"),
        (n, n),
        damier_cells(n, |x, y| {
            if (x + y) % 2 == 0 {
                RotationSelector::Fixed(Rotation::R0)
            } else {
                RotationSelector::Fixed(Rotation::R180)
            }
        }),
    )
}

/// Diagonal checkerboard with uniformly random rotations
///
/// # Errors
///
/// Returns an error if `n` is outside `[DAMIER_MIN, DAMIER_MAX]`.
pub fn damier_random(n: u32) -> Result<Pattern> {
    check_size(n)?;
    Pattern::new(
        format!("damier_{n}_random"),
        format!("Damier {n} motifs (rot. aléatoire)"),
        (n, n),
        damier_cells(n, |_, _| RotationSelector::Random),
    )
}

/// Single-cell pattern drawing a random variant and rotation everywhere
pub fn aleatoire() -> Pattern {
    let cells = vec![(
        (0, 0),
        CellSpec {
            tile: TileSelector::Any,
            rot: RotationSelector::Random,
        },
    )];
    // A 1x1 block with one in-range cell cannot violate construction invariants
    Pattern::new("aleatoire", "Aléatoire", (1, 1), cells)
        .unwrap_or_else(|_| unreachable!("aleatoire pattern is structurally valid"))
}

/// The full stock catalog: `aleatoire` plus all three generated families
pub fn stock_catalog() -> Vec<Pattern> {
    let mut catalog = vec![aleatoire()];
    for n in DAMIER_MIN..=DAMIER_MAX {
        catalog.extend(damier(n));
        catalog.extend(damier_iflip(n));
        catalog.extend(damier_random(n));
    }
    catalog
}
