//! CIE 1976 L*u*v* and its cylindrical form LCh(uv).
//!
//! L is in [0, 100] for colors inside the reference white; u and v are
//! unbounded. The reference white is the illuminant the XYZ value is
//! relative to.

use crate::{Color, ColorResult, LchUv, Luv, Xyz};
use gamut_primaries::Illuminant;

/// CIE epsilon, (6/29)^3.
pub const CIE_EPSILON: f64 = 216.0 / 24389.0;

/// CIE kappa, (29/3)^3.
pub const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// u', v' chromaticity; NaN (black) masks to zero.
#[inline]
fn uv_prime(x: f64, y: f64, z: f64) -> (f64, f64) {
    let denom = x + 15.0 * y + 3.0 * z;
    let u = 4.0 * x / denom;
    let v = 9.0 * y / denom;
    (
        if u.is_nan() { 0.0 } else { u },
        if v.is_nan() { 0.0 } else { v },
    )
}

/// XYZ -> L*u*v* against the white of `illuminant`.
///
/// # Errors
///
/// Missing white point data.
pub fn xyz_to_luv(xyz: Color<Xyz>, illuminant: Illuminant) -> ColorResult<Color<Luv>> {
    let white = illuminant.checked_xyz()?;
    let [x, y, z] = xyz.to_array();

    let (ur, vr) = uv_prime(white.x, white.y, white.z);
    let (up, vp) = uv_prime(x, y, z);

    let yr = y / white.y;
    let l = if yr > CIE_EPSILON {
        116.0 * yr.cbrt() - 16.0
    } else {
        CIE_KAPPA * yr
    };

    Ok(Color::new(l, 13.0 * l * (up - ur), 13.0 * l * (vp - vr)))
}

/// L*u*v* -> XYZ against the white of `illuminant`.
///
/// L = 0 is black regardless of u and v.
///
/// # Errors
///
/// Missing white point data.
pub fn luv_to_xyz(luv: Color<Luv>, illuminant: Illuminant) -> ColorResult<Color<Xyz>> {
    let white = illuminant.checked_xyz()?;
    let [l, u, v] = luv.to_array();
    if l == 0.0 {
        return Ok(Color::new(0.0, 0.0, 0.0));
    }

    let (ur, vr) = uv_prime(white.x, white.y, white.z);
    let yr = if l > CIE_KAPPA * CIE_EPSILON {
        ((l + 16.0) / 116.0).powi(3)
    } else {
        l / CIE_KAPPA
    };
    let y = yr * white.y;

    let up = u / (13.0 * l) + ur;
    let vp = v / (13.0 * l) + vr;

    let x = y * 9.0 * up / (4.0 * vp);
    let z = y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp);
    Ok(Color::new(x, y, z))
}

/// Keeps a hue angle in [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    if h >= 360.0 { h - 360.0 } else { h }
}

/// L*u*v* -> LCh(uv). Hue is in degrees; achromatic colors get hue 0.
pub fn luv_to_lchuv(luv: Color<Luv>) -> Color<LchUv> {
    let [l, u, v] = luv.to_array();
    let c = u.hypot(v);
    let h = normalize_hue(v.atan2(u).to_degrees());
    Color::new(l, c, h)
}

/// LCh(uv) -> L*u*v*.
pub fn lchuv_to_luv(lch: Color<LchUv>) -> Color<Luv> {
    let [l, c, h] = lch.to_array();
    let (sin, cos) = h.to_radians().sin_cos();
    Color::new(l, c * cos, c * sin)
}
