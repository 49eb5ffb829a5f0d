//! 3x3 matrix type for linear color transforms.
//!
//! [`Mat3`] is used for linear RGB to XYZ conversions and for XYZ to LMS
//! cone responses.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```

use crate::Vec3;
use std::ops::Mul;

/// Determinants below this are treated as singular.
const SINGULAR_EPSILON: f32 = 1e-10;

/// A 3x3 matrix for color transformations.
///
/// Stored in row-major order. Use [`Mat3::from_rows`] or
/// [`Mat3::from_col_vecs`] to construct one.
///
/// # Example
///
/// ```rust
/// use chroma_math::{Mat3, Vec3};
///
/// let identity = Mat3::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from Vec3 columns.
    ///
    /// This is how primaries are laid out: one XYZ column per channel.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_rows([[c0.x, c1.x, c2.x], [c0.y, c1.y, c2.y], [c0.z, c1.z, c2.z]])
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular or holds non-finite
    /// elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_math::{Mat3, Vec3, BRADFORD};
    ///
    /// let inv = BRADFORD.inverse().unwrap();
    /// let v = Vec3::new(0.2, 0.3, 0.4);
    /// let back = inv * (BRADFORD * v);
    /// assert!((back.y - v.y).abs() < 1e-5);
    /// assert!(Mat3::ZERO.inverse().is_none());
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let g = self.to_glam();
        let det = g.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return None;
        }
        Some(Self::from_glam(g.inverse()))
    }

    /// Converts to glam Mat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        // glam is column-major, so the rows go in as columns and get transposed
        glam::Mat3::from_cols_array_2d(&self.m).transpose()
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_rows(m.transpose().to_cols_array_2d())
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const BASIS: [Vec3; 3] = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];

    #[test]
    fn test_mat3_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat3::IDENTITY * v, v);
    }

    #[test]
    fn test_mat3_from_col_vecs() {
        let m = Mat3::from_col_vecs(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(m.m[0], [1.0, 4.0, 7.0]);
        assert_eq!(m * BASIS[2], Vec3::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn test_mat3_inverse() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let inv = m.inverse().unwrap();

        // Determinant is 1, so the inverse is integral.
        assert_abs_diff_eq!(inv.m[0][0], -24.0, epsilon = 1e-4);
        assert_abs_diff_eq!(inv.m[0][1], 18.0, epsilon = 1e-4);
        assert_abs_diff_eq!(inv.m[2][2], 1.0, epsilon = 1e-4);

        for e in BASIS {
            let back = inv * (m * e);
            assert_abs_diff_eq!(back.x, e.x, epsilon = 1e-4);
            assert_abs_diff_eq!(back.y, e.y, epsilon = 1e-4);
            assert_abs_diff_eq!(back.z, e.z, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_mat3_singular() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0], // Row 2 = 2 * Row 1
            [1.0, 1.0, 1.0],
        ]);
        assert!(m.inverse().is_none());

        let nan = Mat3::from_rows([[f32::NAN, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(nan.inverse().is_none());
    }

    #[test]
    fn test_mat3_glam_roundtrip() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let g = m.to_glam();
        // glam is column-major: first column is (1, 4, 7)
        assert_eq!(g.x_axis, glam::Vec3::new(1.0, 4.0, 7.0));
        assert_eq!(Mat3::from_glam(g), m);
    }
}
