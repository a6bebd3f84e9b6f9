//! Spectral locus from color matching functions.
//!
//! The locus is the curve traced by monochromatic light. Rows of a CIE
//! 1931 2-degree CMF table are treated as XYZ, scaled so the peak Y is 1,
//! and pushed through the XYZ -> target edge like any other point.

use crate::{GeometryError, GeometryResult, Point};
use gamut_color::{ColorError, ColorModel, TransformOptions, transform};
use gamut_math::Matrix;
use gamut_primaries::{Illuminant, RgbSpace};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One row of a color matching function table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CmfRow {
    /// Wavelength in nm.
    pub wavelength: f64,
    /// x-bar.
    pub x: f64,
    /// y-bar.
    pub y: f64,
    /// z-bar.
    pub z: f64,
}

fn validate(rows: &[CmfRow]) -> GeometryResult<f64> {
    if rows.is_empty() {
        return Err(GeometryError::InvalidCmfTable { reason: "no rows" });
    }
    if !rows.windows(2).all(|w| w[0].wavelength < w[1].wavelength) {
        return Err(GeometryError::InvalidCmfTable {
            reason: "wavelengths not strictly increasing",
        });
    }
    let peak = rows.iter().map(|r| r.y).fold(f64::NEG_INFINITY, f64::max);
    if !peak.is_finite() || peak <= 0.0 {
        return Err(GeometryError::InvalidCmfTable {
            reason: "no positive y-bar value",
        });
    }
    Ok(peak)
}

/// Maps CMF rows onto `target`, one point per wavelength.
///
/// `space` is only consulted for an RGB target, where the result is
/// companded RGB in [0, 255] and usually far out of gamut.
///
/// # Errors
///
/// - [`GeometryError::InvalidCmfTable`] for an empty, unsorted or all-dark
///   table.
/// - Conversion failures, as for [`crate::map_positions`].
pub fn spectral_locus(
    rows: &[CmfRow],
    target: ColorModel,
    space: &RgbSpace,
    illuminant: Illuminant,
) -> GeometryResult<Vec<Point>> {
    let peak = validate(rows)?;
    let t = transform(ColorModel::Xyz, target)?.prepare(space, illuminant, TransformOptions::COMPANDED);

    let table: Vec<Vec<f64>> = rows.iter().map(|r| vec![r.x, r.y, r.z]).collect();
    let xyz = Matrix::from_rows(&table).map_err(ColorError::from)?.scale(1.0 / peak);

    let points = (0..xyz.rows())
        .map(|i| {
            let row = xyz.row(i);
            Ok(t.apply([row[0], row[1], row[2]])?)
        })
        .collect::<GeometryResult<Vec<_>>>()?;

    debug!(rows = rows.len(), %target, "Mapped spectral locus");
    Ok(points)
}
