//! RGB <-> XYZ.
//!
//! RGB values are display-referred in [0, 255]. The forward direction
//! normalizes, optionally linearizes through the space's companding curve,
//! applies the derived RGB -> XYZ matrix and finally adapts from the space's
//! native white to the requested illuminant. The inverse runs the same steps
//! backwards.

use crate::{Color, ColorResult, Rgb, TransformOptions, Xyz, bradford_matrix};
use gamut_math::{Mat3, Vec3};
use gamut_primaries::{Illuminant, RgbSpace, derive_rgb_to_xyz_matrix};
use gamut_transfer::TransferCurve;

/// Full-scale RGB component value.
pub const RGB_SCALE: f64 = 255.0;

/// RGB <-> XYZ for one space and reference white, with every matrix
/// resolved up front.
///
/// Building one derives the primary matrix, its inverse and both Bradford
/// matrices; converting is then infallible. Build it once per batch of
/// points rather than per point.
///
/// # Example
///
/// ```rust
/// use gamut_color::{Color, RgbConverter, Rgb, TransformOptions};
/// use gamut_primaries::{Illuminant, SRGB};
///
/// let conv = RgbConverter::new(&SRGB, Illuminant::D50, TransformOptions::default()).unwrap();
/// let white = conv.to_xyz(Color::<Rgb>::new(255.0, 255.0, 255.0));
/// assert!((white.to_array()[1] - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RgbConverter {
    forward: Mat3,
    inverse: Mat3,
    /// Native white to the requested one.
    adapt_in: Option<Mat3>,
    /// Requested white back to native.
    adapt_out: Option<Mat3>,
    curve: Option<TransferCurve>,
}

impl RgbConverter {
    /// Resolves `space` against `illuminant`.
    ///
    /// # Errors
    ///
    /// Missing registry data or a singular primary matrix.
    pub fn new(space: &RgbSpace, illuminant: Illuminant, options: TransformOptions) -> ColorResult<Self> {
        let forward = derive_rgb_to_xyz_matrix(space, space.illuminant)?;
        Ok(Self {
            forward,
            inverse: forward.inverse()?,
            adapt_in: bradford_matrix(space.illuminant, illuminant)?,
            adapt_out: bradford_matrix(illuminant, space.illuminant)?,
            curve: options.companding.then(|| space.companding.curve()),
        })
    }

    /// Display RGB to XYZ.
    pub fn to_xyz(&self, rgb: Color<Rgb>) -> Color<Xyz> {
        let normalized = rgb.to_array().map(|c| c / RGB_SCALE);
        let linear = match &self.curve {
            Some(curve) => curve.linearize_rgb(normalized),
            None => normalized,
        };
        let native = self.forward * Vec3::from(linear);
        Color::from_vec3(match self.adapt_in {
            Some(m) => m * native,
            None => native,
        })
    }

    /// XYZ to display RGB. Out-of-gamut colors are not clamped.
    pub fn to_rgb(&self, xyz: Color<Xyz>) -> Color<Rgb> {
        let native = match self.adapt_out {
            Some(m) => m * xyz.to_vec3(),
            None => xyz.to_vec3(),
        };
        let linear = (self.inverse * native).to_array();
        let encoded = match &self.curve {
            Some(curve) => curve.delinearize_rgb(linear),
            None => linear,
        };
        Color::from_array(encoded.map(|c| c * RGB_SCALE))
    }
}

/// Converts display RGB in `space` to XYZ relative to `illuminant`.
///
/// Resolves the matrices on every call; see [`RgbConverter`] for batches.
///
/// # Errors
///
/// Missing registry data or a singular primary matrix.
pub fn rgb_to_xyz(
    rgb: Color<Rgb>,
    space: &RgbSpace,
    illuminant: Illuminant,
    options: TransformOptions,
) -> ColorResult<Color<Xyz>> {
    Ok(RgbConverter::new(space, illuminant, options)?.to_xyz(rgb))
}

/// Converts XYZ relative to `illuminant` to display RGB in `space`.
///
/// Out-of-gamut colors produce components outside [0, 255]; nothing is
/// clamped here.
///
/// # Errors
///
/// Missing registry data or a singular primary matrix.
pub fn xyz_to_rgb(
    xyz: Color<Xyz>,
    space: &RgbSpace,
    illuminant: Illuminant,
    options: TransformOptions,
) -> ColorResult<Color<Rgb>> {
    Ok(RgbConverter::new(space, illuminant, options)?.to_rgb(xyz))
}
