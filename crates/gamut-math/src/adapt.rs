//! Chromatic Adaptation Transforms (CAT).
//!
//! Matrices and functions for adapting XYZ values between reference white
//! points. Illuminant white points themselves live in `gamut-primaries`.
//!
//! # Usage
//!
//! ```rust
//! use gamut_math::{adaptation_matrix, BRADFORD, Vec3};
//!
//! let d65 = Vec3::new(0.95047, 1.0, 1.08883);
//! let d50 = Vec3::new(0.96422, 1.0, 0.82521);
//!
//! let d65_to_d50 = adaptation_matrix(BRADFORD, d65, d50).unwrap();
//! let white = d65_to_d50 * d65;
//! assert!((white.z - d50.z).abs() < 1e-12);
//! ```

use crate::{Mat3, MathResult, Vec3};

/// Bradford chromatic adaptation matrix.
///
/// Transforms XYZ to a "sharpened" cone response space.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries chromatic adaptation matrix (Hunt-Pointer-Estevez).
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// Computes a chromatic adaptation matrix between two white points.
///
/// Both white points are mapped into the cone space of `method`, a diagonal
/// ratio matrix is formed, and the result is `M^-1 * S * M`. The inverse is
/// computed from `method`, so forward
/// and backward adaptation compose to identity at full precision.
///
/// # Errors
///
/// Propagates [`crate::MathError::SingularMatrix`] if `method` is singular.
pub fn adaptation_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> MathResult<Mat3> {
    let method_inv = method.inverse()?;

    let src_cone = method * src_white;
    let dst_cone = method * dst_white;
    let ratio = dst_cone.div_elem(src_cone);

    Ok(method_inv * Mat3::diagonal(ratio.x, ratio.y, ratio.z) * method)
}
