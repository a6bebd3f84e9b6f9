//! Bradford chromatic adaptation between illuminants.

use crate::{Color, ColorResult, Xyz};
use gamut_math::{BRADFORD, Mat3, adaptation_matrix};
use gamut_primaries::Illuminant;

/// Bradford matrix from one white to another; `None` when they are equal.
///
/// # Errors
///
/// Missing white point data or a degenerate adaptation matrix.
pub fn bradford_matrix(from: Illuminant, to: Illuminant) -> ColorResult<Option<Mat3>> {
    if from == to {
        return Ok(None);
    }
    Ok(Some(adaptation_matrix(BRADFORD, from.checked_xyz()?, to.checked_xyz()?)?))
}

/// Adapts an XYZ value from one reference white to another.
///
/// Equal illuminants return the input unchanged, bit for bit; no matrix is
/// built in that case.
///
/// # Errors
///
/// Missing white point data or a degenerate adaptation matrix.
pub fn adapt_xyz(xyz: Color<Xyz>, from: Illuminant, to: Illuminant) -> ColorResult<Color<Xyz>> {
    Ok(match bradford_matrix(from, to)? {
        Some(m) => Color::from_vec3(m * xyz.to_vec3()),
        None => xyz,
    })
}
