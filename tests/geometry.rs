//! Validates homography solving and viewport grid fitting end to end

use calepin::geometry::{FitMode, Quad, Transform, clamp_zoom, fit, solve};

#[test]
fn axis_aligned_destination_solves_to_identity() {
    for (w, h) in [(1.0, 1.0), (320.0, 200.0), (1920.0, 1080.0)] {
        let quad =
            Quad::from_pixels([[0.0, 0.0], [w, 0.0], [w, h], [0.0, h]]).unwrap();
        let transform = solve(w, h, &quad).unwrap();
        assert!(transform.is_affine(), "identity must stay affine for {w}x{h}");

        for (x, y) in [(0.0, 0.0), (w / 3.0, h / 2.0), (w, h)] {
            let (px, py) = transform.apply(x, y);
            assert!((px - x).abs() < 1e-9 && (py - y).abs() < 1e-9);
        }
    }
}

#[test]
fn perspective_destination_emits_sixteen_value_encoding() {
    let quad = Quad::from_pixels([
        [100.0, 80.0],
        [620.0, 120.0],
        [580.0, 440.0],
        [60.0, 400.0],
    ])
    .unwrap();
    let transform = solve(400.0, 300.0, &quad).unwrap();

    let matrix = transform.matrix16();
    match transform {
        Transform::Projective(_) => {
            // Projective terms live in the fourth row of the first two columns
            assert!(matrix[3].abs() > 0.0 || matrix[7].abs() > 0.0);
            // z stays untouched so 2-D planes remain planes
            assert!((matrix[10] - 1.0).abs() < f64::EPSILON);
            assert!(matrix[2].abs() < f64::EPSILON && matrix[6].abs() < f64::EPSILON);
        }
        Transform::Affine(_) => unreachable!("skewed quad cannot be affine"),
    }
}

#[test]
fn three_collinear_corners_fail_to_solve() {
    let quad = Quad::from_pixels([
        [0.0, 0.0],
        [100.0, 0.0],
        [200.0, 0.0],
        [0.0, 150.0],
    ])
    .unwrap();
    assert!(solve(100.0, 100.0, &quad).is_err());
}

#[test]
fn solved_transform_contains_only_finite_values() {
    let quad = Quad::from_pixels([
        [3.0, 7.0],
        [905.0, 2.0],
        [890.0, 700.0],
        [10.0, 655.0],
    ])
    .unwrap();
    let transform = solve(640.0, 480.0, &quad).unwrap();
    assert!(transform.matrix16().iter().all(|v| v.is_finite()));
}

#[test]
fn percent_quad_and_pixel_quad_solve_identically() {
    let pixel = Quad::from_pixels([
        [80.0, 60.0],
        [720.0, 90.0],
        [700.0, 540.0],
        [60.0, 500.0],
    ])
    .unwrap();
    let percent = Quad::from_percent(
        [[10.0, 10.0], [90.0, 15.0], [87.5, 90.0], [7.5, 83.333_333_333_333_33]],
        800.0,
        600.0,
    )
    .unwrap();

    let a = solve(400.0, 300.0, &pixel).unwrap().matrix16();
    let b = solve(400.0, 300.0, &percent).unwrap().matrix16();
    for (va, vb) in a.iter().zip(b.iter()) {
        assert!((va - vb).abs() < 1e-9);
    }
}

#[test]
fn fitted_grid_respects_available_width_everywhere() {
    let viewports = [
        (0.0, 0.0),
        (50.0, 50.0),
        (640.0, 480.0),
        (1280.0, 800.0),
        (3840.0, 2160.0),
    ];
    for (width, height) in viewports {
        for margin in [0.0, 8.0, 24.0, 400.0] {
            for zoom in 2..=20 {
                let geometry = fit(width, height, margin, zoom, FitMode::FillViewport);
                let available = (width - 2.0 * margin).max(0.0);
                assert!(
                    f64::from(geometry.cols * geometry.cell_size_px) <= available,
                    "overflow at {width}x{height} margin {margin} zoom {zoom}"
                );
            }
        }
    }
}

#[test]
fn degenerate_viewport_reports_zero_size_instead_of_failing() {
    let geometry = fit(10.0, 10.0, 20.0, 10, FitMode::FillViewport);
    assert!(geometry.is_degenerate());
    assert_eq!(geometry.width_px(), 0);
}

#[test]
fn zoom_clamps_and_cell_size_shrinks_with_more_columns() {
    assert_eq!(clamp_zoom(1), 2);
    assert_eq!(clamp_zoom(99), 20);

    let coarse = fit(1000.0, 1000.0, 0.0, 4, FitMode::Square);
    let fine = fit(1000.0, 1000.0, 0.0, 16, FitMode::Square);
    assert!(fine.cell_size_px <= coarse.cell_size_px);
}
