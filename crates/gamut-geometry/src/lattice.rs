//! Boundary lattice of the RGB unit cube.
//!
//! A lattice has six paths, one per cube face, in axis-major order (X, Y,
//! Z) with the 0-face before the 1-face. Each path is a square grid of
//! `(d + 1)^2` points stored row-major over the face's two free axes in
//! increasing axis order: the lower free axis picks the row, the higher one
//! the column.

use crate::{GeometryError, GeometryResult};
use gamut_color::ColorModel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Faces of the cube.
pub const FACE_COUNT: usize = 6;

/// Largest supported subdivision count; keeps every vertex index in `u32`.
pub const MAX_DIVISIONS: u32 = 1024;

/// A point of a lattice.
pub type Point = [f64; 3];

/// Ordered face paths of one lattice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryLattice {
    /// Grid subdivisions per face edge.
    pub divisions: u32,
    /// Model the point coordinates are in.
    pub model: ColorModel,
    /// One square grid per face.
    pub paths: Vec<Vec<Point>>,
}

impl GeometryLattice {
    /// Points per row of a path.
    #[inline]
    pub fn row_stride(&self) -> usize {
        row_stride(self.divisions)
    }

    /// Points per path.
    #[inline]
    pub fn path_len(&self) -> usize {
        path_len(self.divisions)
    }

    /// Total number of points over all paths.
    pub fn point_count(&self) -> usize {
        self.paths.iter().map(Vec::len).sum()
    }

    /// All points in path order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.paths.iter().flatten()
    }

    /// Checks the path count and every path length against `divisions`.
    ///
    /// Generated and trimmed lattices always pass; deserialized ones may
    /// not.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidDivisions`] or
    /// [`GeometryError::MalformedLattice`].
    pub fn validate(&self) -> GeometryResult<()> {
        check_divisions(self.divisions)?;
        let malformed = |reason: String| GeometryError::MalformedLattice {
            divisions: self.divisions,
            reason,
        };
        if self.paths.len() != FACE_COUNT {
            return Err(malformed(format!("{} paths, expected {FACE_COUNT}", self.paths.len())));
        }
        let expected = self.path_len();
        if let Some((face, path)) = self.paths.iter().enumerate().find(|(_, p)| p.len() != expected) {
            return Err(malformed(format!("path {face} has {} points, expected {expected}", path.len())));
        }
        Ok(())
    }

    /// Same paths, tagged with another model.
    pub(crate) fn with_paths(&self, model: ColorModel, paths: Vec<Vec<Point>>) -> Self {
        Self {
            divisions: self.divisions,
            model,
            paths,
        }
    }
}

/// Points per row for `divisions`.
#[inline]
pub fn row_stride(divisions: u32) -> usize {
    divisions as usize + 1
}

/// Points per path for `divisions`.
#[inline]
pub fn path_len(divisions: u32) -> usize {
    row_stride(divisions).pow(2)
}

pub(crate) fn check_divisions(divisions: u32) -> GeometryResult<()> {
    if divisions == 0 || divisions > MAX_DIVISIONS {
        return Err(GeometryError::InvalidDivisions {
            divisions,
            max: MAX_DIVISIONS,
        });
    }
    Ok(())
}

/// Generates the RGB cube boundary lattice at `divisions`.
///
/// Coordinates are `i / divisions`, so the lattice spans the unit cube.
/// Edge and corner points are repeated on every face that shares them.
///
/// # Errors
///
/// [`GeometryError::InvalidDivisions`] for 0 or more than [`MAX_DIVISIONS`].
///
/// # Example
///
/// ```rust
/// use gamut_geometry::generate_lattice;
///
/// let lattice = generate_lattice(2).unwrap();
/// assert_eq!(lattice.paths.len(), 6);
/// assert_eq!(lattice.paths[0].len(), 9);
/// assert_eq!(lattice.paths[0][1], [0.0, 0.0, 0.5]);
/// ```
pub fn generate_lattice(divisions: u32) -> GeometryResult<GeometryLattice> {
    check_divisions(divisions)?;
    let n = row_stride(divisions);
    let d = f64::from(divisions);

    let mut paths = Vec::with_capacity(FACE_COUNT);
    for axis in 0..3 {
        let (row_axis, col_axis) = match axis {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        for fixed in [0.0, 1.0] {
            let mut path = Vec::with_capacity(n * n);
            for row in 0..n {
                for col in 0..n {
                    let mut p = [0.0; 3];
                    p[axis] = fixed;
                    p[row_axis] = row as f64 / d;
                    p[col_axis] = col as f64 / d;
                    path.push(p);
                }
            }
            paths.push(path);
        }
    }

    debug!(divisions, points = FACE_COUNT * n * n, "Generated lattice");
    Ok(GeometryLattice {
        divisions,
        model: ColorModel::Rgb,
        paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        for d in [1, 2, 7, 16] {
            let l = generate_lattice(d).unwrap();
            assert_eq!(l.paths.len(), FACE_COUNT);
            assert!(l.paths.iter().all(|p| p.len() == path_len(d)));
            assert_eq!(l.point_count(), FACE_COUNT * path_len(d));
            assert_eq!(l.model, ColorModel::Rgb);
        }
    }

    #[test]
    fn test_zero_divisions() {
        assert_eq!(
            generate_lattice(0),
            Err(GeometryError::InvalidDivisions { divisions: 0, max: MAX_DIVISIONS })
        );
        assert!(generate_lattice(MAX_DIVISIONS + 1).is_err());
    }

    #[test]
    fn test_face_order() {
        let l = generate_lattice(1).unwrap();
        // X=0, X=1, Y=0, Y=1, Z=0, Z=1
        for (face, path) in l.paths.iter().enumerate() {
            let axis = face / 2;
            let fixed = (face % 2) as f64;
            assert!(path.iter().all(|p| p[axis] == fixed), "face {face}");
        }
        // Y=1 face: rows over R, columns over B
        assert_eq!(l.paths[3], vec![[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]]);
    }

    #[test]
    fn test_validate() {
        let good = generate_lattice(3).unwrap();
        assert!(good.validate().is_ok());

        let mut short = good.clone();
        short.paths[2].truncate(4);
        assert!(matches!(
            short.validate(),
            Err(GeometryError::MalformedLattice { divisions: 3, .. })
        ));

        let mut missing = good.clone();
        missing.paths.pop();
        assert!(matches!(missing.validate(), Err(GeometryError::MalformedLattice { .. })));

        let mut zero = good;
        zero.divisions = 0;
        assert!(matches!(zero.validate(), Err(GeometryError::InvalidDivisions { .. })));
    }

    #[test]
    fn test_points_on_boundary() {
        let l = generate_lattice(5).unwrap();
        for p in l.points() {
            assert!(p.iter().all(|c| (0.0..=1.0).contains(c)));
            assert!(p.iter().any(|&c| c == 0.0 || c == 1.0));
        }
    }
}
