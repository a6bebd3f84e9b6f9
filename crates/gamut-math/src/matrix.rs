//! Dense row-major matrices of arbitrary shape.
//!
//! Used where shapes are not known statically (e.g. stacking several
//! triplets into an `n x 3` block and multiplying by a transposed 3x3).
//! Shape errors are reported, never panicked on.

use crate::{Mat3, MathError, MathResult};

/// Dense matrix with `rows * cols` elements stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// [`MathError::Shape`] when `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> MathResult<Self> {
        if data.len() != rows * cols {
            return Err(MathError::Shape {
                op: "new",
                left_rows: rows,
                left_cols: cols,
                right_rows: data.len(),
                right_cols: 1,
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// [`MathError::Shape`] when rows have differing lengths.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamut_math::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get(1, 0), 3.0);
    /// assert!(Matrix::from_rows(&[vec![1.0], vec![1.0, 2.0]]).is_err());
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> MathResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(MathError::Shape {
                op: "from_rows",
                left_rows: rows.len(),
                left_cols: cols,
                right_rows: 1,
                right_cols: bad.len(),
            });
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.concat(),
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics when the index is outside the matrix.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        self.data[row * self.cols + col]
    }

    /// Row-major element buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// [`MathError::Shape`] when `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &Self) -> MathResult<Self> {
        if self.cols != other.rows {
            return Err(MathError::Shape {
                op: "multiply",
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                for j in 0..other.cols {
                    out.data[i * other.cols + j] += a * other.data[k * other.cols + j];
                }
            }
        }
        Ok(out)
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }

    /// Returns every element multiplied by `k`.
    pub fn scale(&self, k: f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v * k).collect(),
        }
    }

    /// Converts to a [`Mat3`].
    ///
    /// # Errors
    ///
    /// [`MathError::Shape`] unless the matrix is 3x3.
    pub fn to_mat3(&self) -> MathResult<Mat3> {
        if self.rows != 3 || self.cols != 3 {
            return Err(MathError::Shape {
                op: "to_mat3",
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: 3,
                right_cols: 3,
            });
        }
        let r = |i: usize| [self.data[i * 3], self.data[i * 3 + 1], self.data[i * 3 + 2]];
        Ok(Mat3::from_rows([r(0), r(1), r(2)]))
    }
}

impl From<Mat3> for Matrix {
    fn from(m: Mat3) -> Self {
        Self {
            rows: 3,
            cols: 3,
            data: m.m.concat(),
        }
    }
}
