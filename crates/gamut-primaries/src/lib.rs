//! # gamut-primaries
//!
//! Color space registry and RGB/XYZ matrix generation.
//!
//! This crate holds the static reference data of the pipeline (illuminant
//! white points, RGB primaries, companding parameters) and derives the 3x3
//! RGB -> XYZ matrices from chromaticities alone. Adding a color space means
//! adding an [`RgbSpace`] entry; no matrices are hardcoded.
//!
//! # Usage
//!
//! ```rust
//! use gamut_primaries::{ColorSpace, Illuminant, derive_rgb_to_xyz_matrix};
//! use gamut_math::Vec3;
//!
//! let m = derive_rgb_to_xyz_matrix(ColorSpace::Srgb.data(), Illuminant::D65).unwrap();
//! let white = m * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`gamut-math`] - matrix operations
//! - [`gamut-transfer`] - companding tags
//!
//! # Used By
//!
//! - `gamut-color` - the transform graph

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod illuminant;
mod space;

pub use error::{RegistryError, RegistryResult};
pub use illuminant::Illuminant;
pub use space::*;

use gamut_math::{Mat3, Vec3};

/// Lifts an xy chromaticity to XYZ with Y = 1.
///
/// Callers validate `y != 0` first (see [`RgbSpace::validate`]).
#[inline]
pub fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
}

/// Derives the RGB -> XYZ matrix of `space` relative to `reference`.
///
/// # Algorithm
///
/// 1. Each primary becomes `[x/y, 1, (1-x-y)/y]`; these rows are transposed
///    so the primaries form the columns of `M`.
/// 2. Per-channel scale factors `S = M^-1 * W` make RGB (1, 1, 1) land on
///    the reference white `W`.
/// 3. The result is `M` with each column scaled by its factor.
///
/// Pass the space's native illuminant to get the colorimetric matrix;
/// adaptation to other whites is done separately with Bradford.
///
/// # Errors
///
/// - [`RegistryError::MissingReferenceData`] for unusable primaries or
///   white point.
/// - [`RegistryError::Math`] when the primaries are collinear.
pub fn derive_rgb_to_xyz_matrix(space: &RgbSpace, reference: Illuminant) -> RegistryResult<Mat3> {
    space.validate()?;
    let white = reference.checked_xyz()?;

    let [r, g, b] = space.primaries.map(|(x, y)| xy_to_xyz(x, y));
    let m = Mat3::from_col_vecs(r, g, b);
    let s = m.inverse()? * white;

    Ok(Mat3::from_col_vecs(r * s.x, g * s.y, b * s.z))
}

/// Derives the XYZ -> RGB matrix; the inverse of [`derive_rgb_to_xyz_matrix`].
///
/// # Errors
///
/// Same as [`derive_rgb_to_xyz_matrix`].
pub fn derive_xyz_to_rgb_matrix(space: &RgbSpace, reference: Illuminant) -> RegistryResult<Mat3> {
    Ok(derive_rgb_to_xyz_matrix(space, reference)?.inverse()?)
}
