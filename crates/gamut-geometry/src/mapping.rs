//! Mapping lattice points into color models.

use crate::{GeometryLattice, GeometryResult, Point};
use gamut_color::{Color, ColorError, ColorModel, RGB_SCALE, Rgb, RgbConverter, TransformOptions, transform};
use gamut_primaries::{Illuminant, RgbSpace, SRGB};
use rayon::prelude::*;
use tracing::debug;

fn scaled(p: &Point) -> Color<Rgb> {
    Color::from_array(p.map(|c| c * RGB_SCALE))
}

fn expect_rgb(lattice: &GeometryLattice) -> GeometryResult<()> {
    if lattice.model != ColorModel::Rgb {
        return Err(ColorError::ModelMismatch {
            expected: ColorModel::Rgb,
            actual: lattice.model,
        }
        .into());
    }
    Ok(())
}

/// Applies `f` to every point, in parallel, keeping path structure.
fn map_points<F>(lattice: &GeometryLattice, f: F) -> GeometryResult<Vec<Vec<Point>>>
where
    F: Fn(&Point) -> GeometryResult<Point> + Sync,
{
    lattice
        .paths
        .par_iter()
        .map(|path| path.par_iter().map(&f).collect::<GeometryResult<Vec<_>>>())
        .collect()
}

/// Maps a unit-cube RGB lattice in `space` into `target`.
///
/// Points are scaled to [0, 255] and converted with companding enabled.
/// The space's matrices are resolved once for the whole lattice.
/// An RGB target returns the lattice unchanged, still in the unit cube.
///
/// # Errors
///
/// - [`ColorError::ModelMismatch`] when the lattice is not RGB.
/// - [`ColorError::UnsupportedConversion`] for reserved targets.
/// - Registry failures from the conversion.
pub fn map_positions(
    lattice: &GeometryLattice,
    space: &RgbSpace,
    target: ColorModel,
    illuminant: Illuminant,
) -> GeometryResult<GeometryLattice> {
    expect_rgb(lattice)?;
    let t = transform(ColorModel::Rgb, target)?;
    if target == ColorModel::Rgb {
        return Ok(lattice.clone());
    }

    let t = t.prepare(space, illuminant, TransformOptions::COMPANDED);
    let paths = map_points(lattice, |p| Ok(t.apply_color(scaled(p))?.value))?;

    debug!(space = space.name, %target, %illuminant, points = lattice.point_count(), "Mapped positions");
    Ok(lattice.with_paths(target, paths))
}

/// Display colors for a unit-cube RGB lattice in `space`.
///
/// Each point goes to XYZ under `illuminant` and back out as companded
/// sRGB, clamped to [0, 1]. The result is an RGB lattice with the same
/// layout as the input.
///
/// # Errors
///
/// Same as [`map_positions`].
pub fn map_colors(
    lattice: &GeometryLattice,
    space: &RgbSpace,
    illuminant: Illuminant,
) -> GeometryResult<GeometryLattice> {
    expect_rgb(lattice)?;
    let source = RgbConverter::new(space, illuminant, TransformOptions::COMPANDED)?;
    let display = RgbConverter::new(&SRGB, illuminant, TransformOptions::COMPANDED)?;

    let paths = map_points(lattice, |p| {
        let rgb = display.to_rgb(source.to_xyz(scaled(p)));
        Ok(rgb.to_array().map(|c| (c / RGB_SCALE).clamp(0.0, 1.0)))
    })?;

    debug!(space = space.name, %illuminant, points = lattice.point_count(), "Mapped colors");
    Ok(lattice.with_paths(ColorModel::Rgb, paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeometryError, generate_lattice};
    use approx::assert_abs_diff_eq;
    use gamut_primaries::{ColorSpace, PROPHOTO_RGB};

    #[test]
    fn test_luv_white_corner() {
        let l = generate_lattice(2).unwrap();
        let luv = map_positions(&l, &SRGB, ColorModel::Luv, Illuminant::D65).unwrap();
        assert_eq!(luv.model, ColorModel::Luv);
        assert_eq!(luv.point_count(), l.point_count());
        // X=1 face, last point is (1, 1, 1)
        let [lw, uw, vw] = luv.paths[1][8];
        assert_abs_diff_eq!(lw, 100.0, epsilon = 1e-6);
        assert_abs_diff_eq!(uw, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(vw, 0.0, epsilon = 1e-6);
        assert_eq!(luv.paths[0][0], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rgb_target_is_identity() {
        let l = generate_lattice(3).unwrap();
        assert_eq!(map_positions(&l, &SRGB, ColorModel::Rgb, Illuminant::D50).unwrap(), l);
    }

    #[test]
    fn test_reserved_target() {
        let l = generate_lattice(1).unwrap();
        let err = map_positions(&l, &SRGB, ColorModel::Lab, Illuminant::D65).unwrap_err();
        assert!(matches!(err, GeometryError::Color(ColorError::UnsupportedConversion { .. })));
    }

    #[test]
    fn test_non_rgb_input_rejected() {
        let l = generate_lattice(1).unwrap();
        let xyz = map_positions(&l, &SRGB, ColorModel::Xyz, Illuminant::D65).unwrap();
        assert!(map_positions(&xyz, &SRGB, ColorModel::Luv, Illuminant::D65).is_err());
    }

    #[test]
    fn test_srgb_colors_are_identity() {
        let l = generate_lattice(4).unwrap();
        let colors = map_colors(&l, &SRGB, Illuminant::D65).unwrap();
        for (a, b) in l.points().zip(colors.points()) {
            for k in 0..3 {
                assert_abs_diff_eq!(a[k], b[k], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_broken_space_fails_once() {
        let broken = RgbSpace {
            primaries: [(0.64, 0.33), (0.30, 0.60), (f64::NAN, 0.06)],
            ..SRGB
        };
        let l = generate_lattice(2).unwrap();
        assert!(matches!(
            map_positions(&l, &broken, ColorModel::Luv, Illuminant::D65),
            Err(GeometryError::Color(ColorError::Registry(_)))
        ));
        assert!(matches!(
            map_colors(&l, &broken, Illuminant::D65),
            Err(GeometryError::Color(ColorError::Registry(_)))
        ));
    }

    #[test]
    fn test_wide_gamut_colors_clamped() {
        let l = generate_lattice(4).unwrap();
        let colors = map_colors(&l, &PROPHOTO_RGB, Illuminant::D50).unwrap();
        assert!(colors.points().flatten().all(|c| (0.0..=1.0).contains(c)));
        for cs in ColorSpace::ALL {
            assert!(map_colors(&l, cs.data(), Illuminant::D65).is_ok());
        }
    }
}
