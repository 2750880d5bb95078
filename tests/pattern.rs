//! Validates periodic resolution, fallbacks and selector bounds

use calepin::math::random::{RandomSource, SeededRandom};
use calepin::pattern::builtin;
use calepin::pattern::{
    CellSpec, Pattern, Rotation, RotationSelector, TileSelector, resolve_cell, resolve_range,
};

fn fixed_cell(tile: usize, rotation: Rotation) -> CellSpec {
    CellSpec {
        tile: TileSelector::Fixed(tile),
        rot: RotationSelector::Fixed(rotation),
    }
}

#[test]
fn fixed_patterns_are_periodic_in_both_axes() {
    let cells = vec![
        ((0, 0), fixed_cell(1, Rotation::R0)),
        ((1, 0), fixed_cell(2, Rotation::R90)),
        ((0, 1), fixed_cell(3, Rotation::R180)),
        ((1, 1), fixed_cell(1, Rotation::R270)),
    ];
    let pattern = Pattern::new("period", "Period", (2, 2), cells).unwrap();
    let mut random = SeededRandom::new(0);

    for row in -5i64..5 {
        for col in -5i64..5 {
            let base = resolve_cell(&pattern, row, col, 3, &mut random);
            for (dj, dk) in [(1i64, 0i64), (0, 1), (-2, 3), (4, -4)] {
                let shifted =
                    resolve_cell(&pattern, row + dk * 2, col + dj * 2, 3, &mut random);
                assert_eq!(base, shifted, "period broken at ({row}, {col})");
            }
        }
    }
}

#[test]
fn omitted_cell_falls_back_to_first_variant_unrotated() {
    // 3x3 block covering every cell except (1, 1)
    let mut cells = Vec::new();
    for y in 0..3 {
        for x in 0..3 {
            if (x, y) != (1, 1) {
                cells.push(((x, y), fixed_cell(2, Rotation::R90)));
            }
        }
    }
    let pattern = Pattern::new("sparse", "Sparse", (3, 3), cells).unwrap();
    let mut random = SeededRandom::new(0);

    let fallback = resolve_cell(&pattern, 1, 1, 4, &mut random);
    assert_eq!(fallback.variant_index, 0);
    assert_eq!(fallback.rotation, Rotation::R0);

    let covered = resolve_cell(&pattern, 0, 0, 4, &mut random);
    assert_eq!(covered.variant_index, 1);
    assert_eq!(covered.rotation, Rotation::R90);
}

#[test]
fn resolution_stays_within_variant_and_rotation_bounds() {
    let pattern = builtin::aleatoire();
    for variant_count in 1..=5 {
        let mut random = SeededRandom::new(variant_count as u64);
        for row in -8i64..8 {
            for col in -8i64..8 {
                let cell = resolve_cell(&pattern, row, col, variant_count, &mut random);
                assert!(cell.variant_index < variant_count);
                assert!(matches!(
                    cell.rotation.degrees(),
                    0 | 90 | 180 | 270
                ));
            }
        }
    }
}

#[test]
fn two_cell_row_pattern_alternates_variant_and_rotation() {
    let cells = vec![
        ((0, 0), fixed_cell(1, Rotation::R0)),
        ((1, 0), fixed_cell(2, Rotation::R90)),
    ];
    let pattern = Pattern::new("pair", "Pair", (2, 1), cells).unwrap();
    let mut random = SeededRandom::new(0);

    let stream = resolve_range(&pattern, 0..1, 0..8, 2, &mut random);
    assert_eq!(stream.len(), 8);
    for cell in &stream {
        if cell.col % 2 == 0 {
            assert_eq!((cell.variant_index, cell.rotation.degrees()), (0, 0));
        } else {
            assert_eq!((cell.variant_index, cell.rotation.degrees()), (1, 90));
        }
    }
}

#[test]
fn resolved_stream_is_row_major_ordered() {
    let pattern = builtin::damier(2).unwrap();
    let mut random = SeededRandom::new(0);
    let stream = resolve_range(&pattern, -1..2, -1..2, 2, &mut random);

    let coordinates: Vec<(i64, i64)> = stream.iter().map(|c| (c.row, c.col)).collect();
    let mut expected = Vec::new();
    for row in -1..2 {
        for col in -1..2 {
            expected.push((row, col));
        }
    }
    assert_eq!(coordinates, expected);
}

#[test]
fn scripted_random_source_makes_draws_deterministic() {
    struct Script(Vec<f64>, usize);

    impl RandomSource for Script {
        fn next_f64(&mut self) -> f64 {
            let value = self.0[self.1 % self.0.len()];
            self.1 += 1;
            value
        }
    }

    let pattern = builtin::aleatoire();
    // First draw selects the variant, second the rotation
    let mut script = Script(vec![0.6, 0.3], 0);
    let cell = resolve_cell(&pattern, 0, 0, 5, &mut script);
    assert_eq!(cell.variant_index, 3);
    assert_eq!(cell.rotation, Rotation::R90);
}
