//! The conversion graph.
//!
//! Edges between models are resolved once by [`transform`] into a
//! [`Transform`], which holds a plain function pointer.
//! [`Transform::prepare`] then binds it to an RGB space and reference
//! white, resolving every matrix before the first point is converted.
//! Resolution is an exhaustive match over model pairs, so adding a model tag
//! without deciding its edges fails to compile rather than failing at
//! runtime.
//!
//! # Registered edges
//!
//! ```text
//! RGB <-> XYZ <-> LUV <-> LCHuv
//!          ^
//!          +----> xyY
//! ```
//!
//! Composed edges (`RGB <-> LUV`, `RGB <-> LCHuv`, `RGB <-> xyY`,
//! `XYZ <-> LCHuv`) chain the direct ones through XYZ. Every implemented
//! model also has an identity edge. LAB and LCHab are reserved tags: any
//! pair involving them is [`ColorError::UnsupportedConversion`].

use crate::{
    AnyColor, Color, ColorError, ColorModel, ColorResult, Model, RgbConverter, lchuv_to_luv, luv_to_lchuv,
    luv_to_xyz, xyy_to_xyz, xyz_to_luv, xyz_to_xyy,
};
use gamut_primaries::{Illuminant, RgbSpace};

/// Per-call conversion switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformOptions {
    /// Apply the RGB space's transfer curve on the RGB side.
    pub companding: bool,
}

impl TransformOptions {
    /// Companded RGB (display-encoded values).
    pub const COMPANDED: Self = Self { companding: true };

    /// Linear RGB (no transfer curve).
    pub const LINEAR: Self = Self { companding: false };
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self::COMPANDED
    }
}

/// Signature shared by every edge.
pub type EdgeFn = fn([f64; 3], &EdgeContext) -> ColorResult<[f64; 3]>;

/// What an edge reads besides the value, resolved once per
/// [`Transform::prepare`].
#[derive(Debug, Clone)]
pub struct EdgeContext {
    illuminant: Illuminant,
    rgb: ColorResult<RgbConverter>,
}

impl EdgeContext {
    /// Reference white of the XYZ side.
    pub fn illuminant(&self) -> Illuminant {
        self.illuminant
    }

    /// The RGB side of the conversion.
    ///
    /// # Errors
    ///
    /// Why the RGB space could not be resolved. Edges that never touch RGB
    /// do not ask, so a broken space only fails RGB edges.
    pub fn rgb(&self) -> ColorResult<&RgbConverter> {
        self.rgb.as_ref().map_err(Clone::clone)
    }
}

/// A resolved conversion between two models.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    from: ColorModel,
    to: ColorModel,
    edge: EdgeFn,
}

impl Transform {
    /// Source model.
    pub fn from_model(&self) -> ColorModel {
        self.from
    }

    /// Destination model.
    pub fn to_model(&self) -> ColorModel {
        self.to
    }

    /// Binds this edge to an RGB space, a reference white and options.
    ///
    /// `space` is used by edges that touch RGB; `illuminant` is the
    /// reference white of the XYZ side.
    pub fn prepare(&self, space: &RgbSpace, illuminant: Illuminant, options: TransformOptions) -> PreparedTransform {
        PreparedTransform {
            transform: *self,
            context: EdgeContext {
                illuminant,
                rgb: RgbConverter::new(space, illuminant, options),
            },
        }
    }

    /// Converts one untagged triple.
    ///
    /// Resolves the space on every call; use [`Transform::prepare`] for
    /// batches.
    ///
    /// # Errors
    ///
    /// Missing registry data or matrix failures.
    pub fn apply(
        &self,
        value: [f64; 3],
        space: &RgbSpace,
        illuminant: Illuminant,
        options: TransformOptions,
    ) -> ColorResult<[f64; 3]> {
        self.prepare(space, illuminant, options).apply(value)
    }

    /// Converts a tagged value, checking its tag first.
    ///
    /// # Errors
    ///
    /// [`ColorError::ModelMismatch`] when `value` is not in the source model,
    /// plus everything [`Transform::apply`] returns.
    pub fn apply_any(
        &self,
        value: AnyColor,
        space: &RgbSpace,
        illuminant: Illuminant,
        options: TransformOptions,
    ) -> ColorResult<AnyColor> {
        self.prepare(space, illuminant, options).apply_any(value)
    }
}

/// A [`Transform`] bound to its space, white and options.
#[derive(Debug, Clone)]
pub struct PreparedTransform {
    transform: Transform,
    context: EdgeContext,
}

impl PreparedTransform {
    /// The unbound edge.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Converts an untagged triple.
    ///
    /// # Errors
    ///
    /// Missing registry data for edges that touch RGB.
    pub fn apply(&self, value: [f64; 3]) -> ColorResult<[f64; 3]> {
        (self.transform.edge)(value, &self.context)
    }

    /// Converts a tagged value, checking its tag first.
    ///
    /// # Errors
    ///
    /// [`ColorError::ModelMismatch`] when `value` is not in the source
    /// model, plus everything [`PreparedTransform::apply`] returns.
    pub fn apply_any(&self, value: AnyColor) -> ColorResult<AnyColor> {
        let Transform { from, to, .. } = self.transform;
        if value.model != from {
            return Err(ColorError::ModelMismatch {
                expected: from,
                actual: value.model,
            });
        }
        Ok(AnyColor::new(to, self.apply(value.value)?))
    }

    /// Converts a typed value; the destination is only known at runtime.
    ///
    /// # Errors
    ///
    /// As for [`PreparedTransform::apply_any`].
    pub fn apply_color<M: Model>(&self, value: Color<M>) -> ColorResult<AnyColor> {
        self.apply_any(value.into_any())
    }
}

/// Converts between two models known at compile time.
///
/// # Errors
///
/// [`ColorError::UnsupportedConversion`] for pairs without an edge, plus
/// conversion failures.
///
/// # Example
///
/// ```rust
/// use gamut_color::{Color, Luv, Rgb, TransformOptions, convert};
/// use gamut_primaries::{Illuminant, SRGB};
///
/// let white = Color::<Rgb>::new(255.0, 255.0, 255.0);
/// let luv: Color<Luv> = convert(white, &SRGB, Illuminant::D65, TransformOptions::default()).unwrap();
/// assert!((luv.to_array()[0] - 100.0).abs() < 1e-6);
/// ```
pub fn convert<F: Model, T: Model>(
    value: Color<F>,
    space: &RgbSpace,
    illuminant: Illuminant,
    options: TransformOptions,
) -> ColorResult<Color<T>> {
    let out = transform(F::MODEL, T::MODEL)?
        .prepare(space, illuminant, options)
        .apply(value.to_array())?;
    Ok(Color::from_array(out))
}

/// Resolves the edge from `from` to `to`.
///
/// # Errors
///
/// [`ColorError::UnsupportedConversion`] for pairs without an edge.
///
/// # Example
///
/// ```rust
/// use gamut_color::{ColorModel, TransformOptions, transform};
/// use gamut_primaries::{Illuminant, SRGB};
///
/// let t = transform(ColorModel::Rgb, ColorModel::Luv).unwrap();
/// let luv = t
///     .apply([255.0, 255.0, 255.0], &SRGB, Illuminant::D65, TransformOptions::default())
///     .unwrap();
/// assert!((luv[0] - 100.0).abs() < 1e-6);
/// ```
pub fn transform(from: ColorModel, to: ColorModel) -> ColorResult<Transform> {
    use ColorModel::*;

    let edge: EdgeFn = match (from, to) {
        (Rgb, Rgb) | (Xyz, Xyz) | (XyY, XyY) | (Luv, Luv) | (LchUv, LchUv) => |v, _| Ok(v),

        (Rgb, Xyz) => |v, cx| Ok(cx.rgb()?.to_xyz(Color::from_array(v)).to_array()),
        (Xyz, Rgb) => |v, cx| Ok(cx.rgb()?.to_rgb(Color::from_array(v)).to_array()),

        (Xyz, Luv) => |v, cx| Ok(xyz_to_luv(Color::from_array(v), cx.illuminant)?.to_array()),
        (Luv, Xyz) => |v, cx| Ok(luv_to_xyz(Color::from_array(v), cx.illuminant)?.to_array()),

        (Luv, LchUv) => |v, _| Ok(luv_to_lchuv(Color::from_array(v)).to_array()),
        (LchUv, Luv) => |v, _| Ok(lchuv_to_luv(Color::from_array(v)).to_array()),

        (Xyz, XyY) => |v, cx| Ok(xyz_to_xyy(Color::from_array(v), cx.illuminant)?.to_array()),
        (XyY, Xyz) => |v, _| Ok(xyy_to_xyz(Color::from_array(v)).to_array()),

        (Rgb, Luv) => |v, cx| {
            let xyz = cx.rgb()?.to_xyz(Color::from_array(v));
            Ok(xyz_to_luv(xyz, cx.illuminant)?.to_array())
        },
        (Luv, Rgb) => |v, cx| {
            let xyz = luv_to_xyz(Color::from_array(v), cx.illuminant)?;
            Ok(cx.rgb()?.to_rgb(xyz).to_array())
        },
        (Rgb, LchUv) => |v, cx| {
            let xyz = cx.rgb()?.to_xyz(Color::from_array(v));
            Ok(luv_to_lchuv(xyz_to_luv(xyz, cx.illuminant)?).to_array())
        },
        (LchUv, Rgb) => |v, cx| {
            let xyz = luv_to_xyz(lchuv_to_luv(Color::from_array(v)), cx.illuminant)?;
            Ok(cx.rgb()?.to_rgb(xyz).to_array())
        },
        (Rgb, XyY) => |v, cx| {
            let xyz = cx.rgb()?.to_xyz(Color::from_array(v));
            Ok(xyz_to_xyy(xyz, cx.illuminant)?.to_array())
        },
        (XyY, Rgb) => |v, cx| {
            let xyz = xyy_to_xyz(Color::from_array(v));
            Ok(cx.rgb()?.to_rgb(xyz).to_array())
        },
        (Xyz, LchUv) => |v, cx| Ok(luv_to_lchuv(xyz_to_luv(Color::from_array(v), cx.illuminant)?).to_array()),
        (LchUv, Xyz) => |v, cx| Ok(luv_to_xyz(lchuv_to_luv(Color::from_array(v)), cx.illuminant)?.to_array()),

        (XyY, Luv | LchUv) | (Luv | LchUv, XyY) => {
            return Err(ColorError::UnsupportedConversion { from, to });
        }
        (Lab | LchAb, _) | (_, Lab | LchAb) => {
            return Err(ColorError::UnsupportedConversion { from, to });
        }
    };

    Ok(Transform { from, to, edge })
}

/// Every model pair with a registered edge, in [`ColorModel::ALL`] order.
pub fn registered_edges() -> Vec<(ColorModel, ColorModel)> {
    ColorModel::ALL
        .into_iter()
        .flat_map(|from| ColorModel::ALL.into_iter().map(move |to| (from, to)))
        .filter(|&(from, to)| transform(from, to).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lab, Luv, Rgb};
    use approx::assert_abs_diff_eq;
    use gamut_primaries::{ColorSpace, RegistryError, SRGB};

    #[test]
    fn test_rgb_white_to_luv() {
        let t = transform(ColorModel::Rgb, ColorModel::Luv).unwrap();
        let [l, u, v] = t
            .apply([255.0, 255.0, 255.0], &SRGB, Illuminant::D65, TransformOptions::default())
            .unwrap();
        assert_abs_diff_eq!(l, 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(u, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_reserved_models_unsupported() {
        for m in [ColorModel::Lab, ColorModel::LchAb] {
            assert!(matches!(
                transform(ColorModel::Rgb, m),
                Err(ColorError::UnsupportedConversion { .. })
            ));
            assert!(matches!(
                transform(m, ColorModel::Xyz),
                Err(ColorError::UnsupportedConversion { .. })
            ));
            assert!(transform(m, m).is_err());
        }
    }

    #[test]
    fn test_edge_count() {
        let edges = registered_edges();
        // 5 identities + 4 direct pairs + 4 composed pairs, both ways
        assert_eq!(edges.len(), 5 + 8 + 8);
        assert!(edges.contains(&(ColorModel::Xyz, ColorModel::LchUv)));
        assert!(!edges.contains(&(ColorModel::XyY, ColorModel::Luv)));
    }

    #[test]
    fn test_identity_is_exact() {
        let t = transform(ColorModel::Luv, ColorModel::Luv).unwrap();
        let v = [12.5, -3.25, 7.0];
        assert_eq!(t.apply(v, &SRGB, Illuminant::A, TransformOptions::LINEAR).unwrap(), v);
    }

    #[test]
    fn test_apply_any_checks_tag() {
        let t = transform(ColorModel::Xyz, ColorModel::XyY).unwrap();
        let wrong = AnyColor::new(ColorModel::Rgb, [1.0, 1.0, 1.0]);
        let err = t
            .apply_any(wrong, &SRGB, Illuminant::D65, TransformOptions::default())
            .unwrap_err();
        assert!(matches!(err, ColorError::ModelMismatch { .. }));

        let ok = AnyColor::new(ColorModel::Xyz, [0.2, 0.3, 0.5]);
        let out = t.apply_any(ok, &SRGB, Illuminant::D65, TransformOptions::default()).unwrap();
        assert_eq!(out.model, ColorModel::XyY);
        assert_abs_diff_eq!(out.value[0], 0.2, epsilon = 1e-15);
    }

    #[test]
    fn test_missing_primaries_through_edge() {
        let broken = RgbSpace {
            name: "broken",
            primaries: [(0.64, 0.33), (0.30, 0.0), (0.15, 0.06)],
            ..SRGB
        };
        let to_xyz = transform(ColorModel::Rgb, ColorModel::Xyz).unwrap();
        let err = to_xyz
            .apply([10.0, 20.0, 30.0], &broken, Illuminant::D65, TransformOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            ColorError::Registry(RegistryError::MissingReferenceData {
                space: "broken".to_string(),
                field: "primaries"
            })
        );

        // edges that never touch RGB ignore the space
        let to_luv = transform(ColorModel::Xyz, ColorModel::Luv).unwrap();
        assert!(to_luv.apply([0.2, 0.3, 0.4], &broken, Illuminant::D65, TransformOptions::default()).is_ok());
    }

    #[test]
    fn test_prepared_matches_apply() {
        let t = transform(ColorModel::Rgb, ColorModel::LchUv).unwrap();
        let prepared = t.prepare(&SRGB, Illuminant::D50, TransformOptions::default());
        for rgb in [[0.0, 0.0, 0.0], [255.0, 10.0, 99.0], [1.0, 254.0, 128.0]] {
            let once = t.apply(rgb, &SRGB, Illuminant::D50, TransformOptions::default()).unwrap();
            assert_eq!(prepared.apply(rgb).unwrap(), once);
        }
        assert_eq!(prepared.transform().to_model(), ColorModel::LchUv);
    }

    #[test]
    fn test_typed_conversion() {
        let white = Color::<Rgb>::new(255.0, 255.0, 255.0);
        let luv: Color<Luv> = convert(white, &SRGB, Illuminant::D65, TransformOptions::default()).unwrap();
        assert_abs_diff_eq!(luv.to_array()[0], 100.0, epsilon = 1e-6);

        let lab: ColorResult<Color<Lab>> = convert(white, &SRGB, Illuminant::D65, TransformOptions::default());
        assert!(matches!(lab, Err(ColorError::UnsupportedConversion { .. })));

        let prepared = transform(ColorModel::Rgb, ColorModel::Xyz)
            .unwrap()
            .prepare(&SRGB, Illuminant::D65, TransformOptions::default());
        assert!(matches!(
            prepared.apply_color(Color::<Luv>::new(50.0, 0.0, 0.0)),
            Err(ColorError::ModelMismatch { expected: ColorModel::Rgb, actual: ColorModel::Luv })
        ));
    }

    #[test]
    fn test_every_edge_inverts() {
        let rgb = [40.0, 180.0, 220.0];
        for cs in ColorSpace::ALL {
            for (from, to) in registered_edges() {
                if from != ColorModel::Rgb {
                    continue;
                }
                let fwd = transform(from, to).unwrap();
                let inv = transform(to, from).unwrap();
                let mid = fwd.apply(rgb, cs.data(), Illuminant::D50, TransformOptions::default()).unwrap();
                let back = inv.apply(mid, cs.data(), Illuminant::D50, TransformOptions::default()).unwrap();
                for k in 0..3 {
                    assert_abs_diff_eq!(back[k], rgb[k], epsilon = 1e-6);
                }
            }
        }
    }
}
