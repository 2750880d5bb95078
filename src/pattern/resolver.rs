//! Periodic cell resolution
//!
//! Maps any cell of the infinite grid to a variant index and rotation by
//! wrapping the cell into the pattern's repeating block. Resolution never
//! fails: uncovered cells, out-of-range indices and empty filtered lists all
//! fall back to the first variant, unrotated.

use ndarray::Array2;

use crate::math::random::RandomSource;
use crate::pattern::definition::{Pattern, Rotation, RotationSelector, TileSelector};

/// Variant and rotation assigned to one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CellAssignment {
    /// 0-based index into the variant set
    pub variant_index: usize,
    /// Quarter-turn rotation applied to the variant
    pub rotation: Rotation,
}

/// One entry of the resolved cell stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedCell {
    /// Grid row (may be negative)
    pub row: i64,
    /// Grid column (may be negative)
    pub col: i64,
    /// 0-based index into the variant set
    pub variant_index: usize,
    /// Quarter-turn rotation applied to the variant
    pub rotation: Rotation,
}

/// Resolve a single grid cell to a variant and rotation
///
/// The cell wraps into the repeating block with `rem_euclid`, so the pattern
/// tiles seamlessly in all four directions including negative coordinates.
/// Fixed selectors make this a pure function of position; `Any` and `Random`
/// selectors consume entropy from `random`.
pub fn resolve_cell(
    pattern: &Pattern,
    row: i64,
    col: i64,
    variant_count: usize,
    random: &mut dyn RandomSource,
) -> CellAssignment {
    let (cols, rows) = pattern.block_size();
    let bx = col.rem_euclid(i64::from(cols)) as u32;
    let by = row.rem_euclid(i64::from(rows)) as u32;

    let Some(spec) = pattern.cell(bx, by) else {
        // Uncovered cells are a documented default, not an error
        return CellAssignment::default();
    };

    let variant_index = resolve_tile(&spec.tile, variant_count, random);
    let rotation = match spec.rot {
        RotationSelector::Fixed(rotation) => rotation,
        RotationSelector::Random => Rotation::ALL[random.uniform_index(Rotation::ALL.len())],
    };

    CellAssignment {
        variant_index,
        rotation,
    }
}

fn resolve_tile(
    selector: &TileSelector,
    variant_count: usize,
    random: &mut dyn RandomSource,
) -> usize {
    if variant_count == 0 {
        return 0;
    }

    match selector {
        // 1-based in definitions, clamped into the available variant range
        TileSelector::Fixed(index) => index.saturating_sub(1).min(variant_count - 1),
        TileSelector::Any => random.uniform_index(variant_count),
        TileSelector::List(indices) => {
            let valid: Vec<usize> = indices
                .iter()
                .filter(|&&index| index >= 1 && index <= variant_count)
                .map(|&index| index - 1)
                .collect();
            if valid.is_empty() {
                // Entirely out-of-range lists fall back to the first global variant
                0
            } else {
                valid[random.uniform_index(valid.len())]
            }
        }
    }
}

/// Resolve a rectangular cell range into an ordered row-major stream
///
/// Rows iterate `row_start..row_end`, columns `col_start..col_end`; both
/// bounds may be negative. Empty or inverted ranges yield an empty stream.
pub fn resolve_range(
    pattern: &Pattern,
    rows: std::ops::Range<i64>,
    cols: std::ops::Range<i64>,
    variant_count: usize,
    random: &mut dyn RandomSource,
) -> Vec<ResolvedCell> {
    let mut stream = Vec::new();
    for row in rows {
        for col in cols.clone() {
            let assignment = resolve_cell(pattern, row, col, variant_count, random);
            stream.push(ResolvedCell {
                row,
                col,
                variant_index: assignment.variant_index,
                rotation: assignment.rotation,
            });
        }
    }
    stream
}

/// Resolve a `rows x cols` grid anchored at cell `(0, 0)`
///
/// Convenience form of [`resolve_range`] for renderers that want the
/// assignments as a dense 2-D array indexed by `[row, col]`.
pub fn resolve_grid(
    pattern: &Pattern,
    rows: u32,
    cols: u32,
    variant_count: usize,
    random: &mut dyn RandomSource,
) -> Array2<CellAssignment> {
    Array2::from_shape_fn((rows as usize, cols as usize), |(row, col)| {
        resolve_cell(pattern, row as i64, col as i64, variant_count, random)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::random::SeededRandom;
    use crate::pattern::definition::CellSpec;

    fn fixed_pattern() -> Pattern {
        let cells = vec![
            (
                (0, 0),
                CellSpec {
                    tile: TileSelector::Fixed(1),
                    rot: RotationSelector::Fixed(Rotation::R0),
                },
            ),
            (
                (1, 0),
                CellSpec {
                    tile: TileSelector::Fixed(2),
                    rot: RotationSelector::Fixed(Rotation::R90),
                },
            ),
        ];
        Pattern::new("pair", "Pair", (2, 1), cells).unwrap()
    }

    #[test]
    fn fixed_index_clamps_to_variant_count() {
        let cells = vec![(
            (0, 0),
            CellSpec {
                tile: TileSelector::Fixed(9),
                rot: RotationSelector::Fixed(Rotation::R0),
            },
        )];
        let pattern = Pattern::new("clamp", "Clamp", (1, 1), cells).unwrap();
        let mut random = SeededRandom::new(0);
        let assignment = resolve_cell(&pattern, 0, 0, 3, &mut random);
        assert_eq!(assignment.variant_index, 2);
    }

    #[test]
    fn out_of_range_list_falls_back_to_first_variant() {
        let cells = vec![(
            (0, 0),
            CellSpec {
                tile: TileSelector::List(vec![7, 8]),
                rot: RotationSelector::Fixed(Rotation::R0),
            },
        )];
        let pattern = Pattern::new("list", "List", (1, 1), cells).unwrap();
        let mut random = SeededRandom::new(0);
        let assignment = resolve_cell(&pattern, 0, 0, 3, &mut random);
        assert_eq!(assignment.variant_index, 0);
    }

    #[test]
    fn list_draw_stays_within_valid_subset() {
        let cells = vec![(
            (0, 0),
            CellSpec {
                tile: TileSelector::List(vec![1, 9, 3]),
                rot: RotationSelector::Fixed(Rotation::R0),
            },
        )];
        let pattern = Pattern::new("list", "List", (1, 1), cells).unwrap();
        let mut random = SeededRandom::new(11);
        for _ in 0..64 {
            let assignment = resolve_cell(&pattern, 0, 0, 4, &mut random);
            assert!(assignment.variant_index == 0 || assignment.variant_index == 2);
        }
    }

    #[test]
    fn negative_coordinates_wrap_seamlessly() {
        let pattern = fixed_pattern();
        let mut random = SeededRandom::new(0);
        let at_origin = resolve_cell(&pattern, 0, 0, 2, &mut random);
        let wrapped = resolve_cell(&pattern, -3, -2, 2, &mut random);
        assert_eq!(at_origin, wrapped);
    }

    #[test]
    fn resolve_grid_matches_resolve_cell() {
        let pattern = fixed_pattern();
        let mut random = SeededRandom::new(0);
        let grid = resolve_grid(&pattern, 2, 4, 2, &mut random);
        assert_eq!(grid[[0, 1]].variant_index, 1);
        assert_eq!(grid[[0, 1]].rotation, Rotation::R90);
        assert_eq!(grid[[1, 2]].variant_index, 0);
    }

    #[test]
    fn zero_variant_count_resolves_to_zero() {
        let pattern = fixed_pattern();
        let mut random = SeededRandom::new(0);
        let assignment = resolve_cell(&pattern, 0, 1, 0, &mut random);
        assert_eq!(assignment.variant_index, 0);
    }
}
