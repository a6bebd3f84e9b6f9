//! CIE xyY: chromaticity plus luminance.

use crate::{Color, ColorResult, XyY, Xyz};
use gamut_primaries::Illuminant;

/// XYZ -> xyY.
///
/// Black has no chromaticity of its own; it takes the white point's xy
/// with Y = 0, so a black lattice corner stays on the neutral axis.
///
/// # Errors
///
/// Missing white point data.
pub fn xyz_to_xyy(xyz: Color<Xyz>, illuminant: Illuminant) -> ColorResult<Color<XyY>> {
    let [x, y, z] = xyz.to_array();
    let sum = x + y + z;
    if sum == 0.0 {
        let white = illuminant.checked_xyz()?;
        let w = white.sum();
        return Ok(Color::new(white.x / w, white.y / w, 0.0));
    }
    Ok(Color::new(x / sum, y / sum, y))
}

/// xyY -> XYZ. A zero y chromaticity maps to black.
pub fn xyy_to_xyz(xyy: Color<XyY>) -> Color<Xyz> {
    let [x, y, big_y] = xyy.to_array();
    if y == 0.0 {
        return Color::new(0.0, 0.0, 0.0);
    }
    let k = big_y / y;
    Color::new(x * k, big_y, (1.0 - x - y) * k)
}
