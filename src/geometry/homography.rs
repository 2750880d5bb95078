//! Projective transform solving and encoding
//!
//! Computes the unique 8-degree-of-freedom projective transform sending the
//! axis-aligned rectangle `[0, w] x [0, h]` onto a destination quadrilateral.
//! The four point correspondences yield a fixed 8x8 linear system, solved by
//! Gaussian elimination with pivoting; the solver never propagates NaN or
//! infinity and reports degenerate destinations as [`SingularTransform`]
//! failures instead.
//!
//! [`SingularTransform`]: crate::ConfiguratorError::SingularTransform

use crate::geometry::quad::Quad;
use crate::io::configuration::{
    MAX_COEFFICIENT, PIVOT_EPS_ABS, PIVOT_EPS_REL, PROJECTIVE_EPS,
};
use crate::io::error::{Result, singular_transform};

/// Solved projective map in one of two rendering-layer encodings
///
/// Both encodings follow the column-vector convention of 2-D/3-D rendering
/// stacks: the affine form is the 6-value `matrix(a, b, c, d, e, f)` layout,
/// the projective form the column-major 16-value `matrix3d` layout with the
/// projective terms in the fourth row and all z terms neutral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// Pure affine map `[a, b, c, d, e, f]`: `x' = a·x + c·y + e`, `y' = b·x + d·y + f`
    Affine([f64; 6]),
    /// Full homogeneous map, column-major 4x4, z-independent
    Projective([f64; 16]),
}

impl Transform {
    /// The identity transform
    pub const IDENTITY: Self = Self::Affine([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Accept a precomputed 16-value column-major transform
    ///
    /// Collapses to the compact affine encoding when the projective terms are
    /// negligible, mirroring what [`solve`] emits.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is not finite.
    pub fn from_matrix16(values: [f64; 16]) -> Result<Self> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(singular_transform("precomputed matrix has non-finite entries"));
        }
        if values[3].abs() < PROJECTIVE_EPS && values[7].abs() < PROJECTIVE_EPS {
            Ok(Self::Affine([
                values[0], values[1], values[4], values[5], values[12], values[13],
            ]))
        } else {
            Ok(Self::Projective(values))
        }
    }

    /// The 16-value column-major encoding, regardless of variant
    pub const fn matrix16(&self) -> [f64; 16] {
        match *self {
            Self::Affine([a, b, c, d, e, f]) => [
                a, b, 0.0, 0.0, //
                c, d, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                e, f, 0.0, 1.0,
            ],
            Self::Projective(values) => values,
        }
    }

    /// The 3x3 row-major homogeneous matrix acting on `(x, y, 1)` columns
    pub const fn matrix3(&self) -> [[f64; 3]; 3] {
        let m = self.matrix16();
        [
            [m[0], m[4], m[12]],
            [m[1], m[5], m[13]],
            [m[3], m[7], m[15]],
        ]
    }

    /// Whether the projective component is negligible
    pub const fn is_affine(&self) -> bool {
        matches!(self, Self::Affine(_))
    }

    /// Project a point through the transform
    pub const fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let m = self.matrix3();
        let xp = m[0][0] * x + m[0][1] * y + m[0][2];
        let yp = m[1][0] * x + m[1][1] * y + m[1][2];
        let w = m[2][0] * x + m[2][1] * y + m[2][2];
        (xp / w, yp / w)
    }

    /// Invert the 3x3 homogeneous matrix by its adjugate
    ///
    /// Mockup renderers sample destination pixels back into the source grid
    /// with this inverse.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is singular.
    pub fn inverse3(&self) -> Result<[[f64; 3]; 3]> {
        let m = self.matrix3();
        let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);

        if !det.is_finite() || det.abs() < PIVOT_EPS_ABS {
            return Err(singular_transform("transform is not invertible"));
        }

        let inv_det = 1.0 / det;
        Ok([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ])
    }
}

/// Compute the projective transform sending `[0, w] x [0, h]` onto a quad
///
/// Corner correspondence is fixed by ordering: top-left to the quad's first
/// point, then clockwise. Source coordinates are normalized to the unit
/// square before solving and the coefficients rescaled back to pixel space.
/// Identical inputs always produce identical output; the deterministic
/// pivoting rule fixes the floating-point evaluation order.
///
/// # Errors
///
/// Returns [`SingularTransform`] if the source rectangle is empty, the
/// destination is degenerate (for example three collinear corners) or the
/// solution contains non-finite or absurdly large coefficients.
///
/// [`SingularTransform`]: crate::ConfiguratorError::SingularTransform
pub fn solve(source_width: f64, source_height: f64, quad: &Quad) -> Result<Transform> {
    if !(source_width.is_finite() && source_height.is_finite())
        || source_width <= 0.0
        || source_height <= 0.0
    {
        return Err(singular_transform("source rectangle is empty"));
    }

    // Unit-square corners paired with the destination, clockwise from top-left
    let unit = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    let dest = quad.points();

    // Augmented 8x9 system for the 8 unknowns a..h; the ninth homogeneous
    // entry is fixed to 1
    let mut system = [[0.0f64; 9]; 8];
    for i in 0..4 {
        let [u, v] = unit[i];
        let [x, y] = dest[i];

        system[2 * i] = [u, v, 1.0, 0.0, 0.0, 0.0, -u * x, -v * x, x];
        system[2 * i + 1] = [0.0, 0.0, 0.0, u, v, 1.0, -u * y, -v * y, y];
    }

    let coefficients = eliminate(&mut system)?;
    let [a, b, c, d, e, f, g, h] = coefficients;

    // Projective terms are judged in normalized space, where they are
    // dimensionless, before rescaling introduces 1/pixel units
    let affine = g.abs() < PROJECTIVE_EPS && h.abs() < PROJECTIVE_EPS;

    // Undo the unit-square normalization: (u, v) = (x / w, y / h)
    let scaled = [
        a / source_width,
        b / source_height,
        c,
        d / source_width,
        e / source_height,
        f,
        g / source_width,
        h / source_height,
    ];

    if scaled
        .iter()
        .any(|value| !value.is_finite() || value.abs() > MAX_COEFFICIENT)
    {
        return Err(singular_transform("solution exceeds numerical bounds"));
    }

    let [sa, sb, sc, sd, se, sf, sg, sh] = scaled;
    if affine {
        Ok(Transform::Affine([sa, sd, sb, se, sc, sf]))
    } else {
        Ok(Transform::Projective([
            sa, sd, 0.0, sg, //
            sb, se, 0.0, sh, //
            0.0, 0.0, 1.0, 0.0, //
            sc, sf, 0.0, 1.0,
        ]))
    }
}

/// Gaussian elimination with column-max pivoting on the fixed 8x9 system
fn eliminate(system: &mut [[f64; 9]; 8]) -> Result<[f64; 8]> {
    for col in 0..8 {
        // Scale reference for the relative degeneracy check
        let mut column_scale = 0.0f64;
        for row in system.iter() {
            column_scale = column_scale.max(row[col].abs());
        }

        // Largest-magnitude candidate pivot among the remaining rows
        let mut pivot_row = col;
        let mut pivot_abs = system[col][col].abs();
        for row in (col + 1)..8 {
            let candidate = system[row][col].abs();
            if candidate > pivot_abs {
                pivot_abs = candidate;
                pivot_row = row;
            }
        }

        if pivot_abs < PIVOT_EPS_ABS.max(PIVOT_EPS_REL * column_scale) {
            return Err(singular_transform(
                "destination corners are collinear or coincident",
            ));
        }

        if pivot_row != col {
            system.swap(col, pivot_row);
        }

        let pivot = system[col][col];
        for row in (col + 1)..8 {
            let factor = system[row][col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..9 {
                system[row][k] -= factor * system[col][k];
            }
        }
    }

    let mut solution = [0.0f64; 8];
    for row in (0..8).rev() {
        let mut sum = system[row][8];
        for k in (row + 1)..8 {
            sum -= system[row][k] * solution[k];
        }
        solution[row] = sum / system[row][row];
    }
    Ok(solution)
}
