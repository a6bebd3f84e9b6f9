//! 3x3 matrix type for color transformations.
//!
//! [`Mat3`] is used for RGB-to-XYZ conversions and chromatic adaptation.
//! Determinant, cofactors and inverse are only provided at this size; the
//! dense [`crate::Matrix`] covers the general shape-checked products.
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

use crate::{MathError, MathResult, Vec3};
use std::ops::{Index, Mul};

/// Determinant magnitude below which a matrix is treated as singular.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// A 3x3 matrix for color transformations.
///
/// # Example
///
/// ```rust
/// use gamut_math::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
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
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f64; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a matrix from Vec3 columns.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.m)
    }

    /// Returns every element multiplied by `k`.
    #[inline]
    pub fn scale(&self, k: f64) -> Self {
        let mut out = *self;
        out.m.iter_mut().flatten().for_each(|v| *v *= k);
        out
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Signed 2x2 minor for element `(row, col)`.
    fn cofactor(&self, row: usize, col: usize) -> f64 {
        let r = [(row + 1) % 3, (row + 2) % 3];
        let c = [(col + 1) % 3, (col + 2) % 3];
        // Cyclic index order makes the checkerboard sign implicit.
        self.m[r[0]][c[0]] * self.m[r[1]][c[1]] - self.m[r[0]][c[1]] * self.m[r[1]][c[0]]
    }

    /// Matrix of cofactors `C[i][j] = (-1)^(i+j) * minor(i, j)`.
    pub fn cofactor_matrix(&self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = self.cofactor(i, j);
            }
        }
        out
    }

    /// Adjugate (transposed cofactor matrix).
    #[inline]
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transpose()
    }

    /// Computes the inverse as `adjugate / determinant`.
    ///
    /// # Errors
    ///
    /// [`MathError::SingularMatrix`] when `|det| < SINGULAR_EPSILON`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamut_math::Mat3;
    ///
    /// let m = Mat3::diagonal(2.0, 4.0, 8.0);
    /// assert_eq!(m.inverse().unwrap(), Mat3::diagonal(0.5, 0.25, 0.125));
    /// assert!(Mat3::ZERO.inverse().is_err());
    /// ```
    pub fn inverse(&self) -> MathResult<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return Err(MathError::SingularMatrix { determinant: det });
        }
        Ok(self.adjugate().scale(1.0 / det))
    }

    /// Transforms a Vec3 by this matrix.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Mul<f64> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 3] {
        &self.m[i]
    }
}
