//! Color model tags and model-typed triplets.
//!
//! Every model stores three floats, so nothing in the numbers themselves
//! tells an RGB triple from an XYZ one. [`Color<M>`] carries the model as a
//! zero-sized type parameter, which makes handing an RGB value to an XYZ
//! conversion a compile error:
//!
//! ```compile_fail
//! use gamut_color::{Color, Rgb, xyz_to_luv};
//! use gamut_primaries::Illuminant;
//!
//! let rgb = Color::<Rgb>::new(255.0, 0.0, 0.0);
//! let _ = xyz_to_luv(rgb, Illuminant::D65); // expected Color<Xyz>
//! ```
//!
//! Where the model is only known at runtime (requests, cache records),
//! [`AnyColor`] pairs the triple with its [`ColorModel`] tag.

use crate::{ColorError, ColorResult};
use gamut_math::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Runtime color model tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    /// Display-referred RGB, components in [0, 255].
    Rgb,
    /// CIE 1931 XYZ, reference white at Y = 1.
    Xyz,
    /// Chromaticity plus luminance.
    #[serde(rename = "xyy")]
    XyY,
    /// CIE 1976 L*u*v*.
    Luv,
    /// Cylindrical L*u*v*: lightness, chroma, hue in degrees.
    #[serde(rename = "lchuv")]
    LchUv,
    /// CIE L*a*b* (reserved, no conversions registered).
    Lab,
    /// Cylindrical L*a*b* (reserved, no conversions registered).
    #[serde(rename = "lchab")]
    LchAb,
}

impl ColorModel {
    /// Every model tag, reserved ones included.
    pub const ALL: [Self; 7] = [
        Self::Rgb,
        Self::Xyz,
        Self::XyY,
        Self::Luv,
        Self::LchUv,
        Self::Lab,
        Self::LchAb,
    ];

    /// Key used in requests and cache keys.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Xyz => "xyz",
            Self::XyY => "xyy",
            Self::Luv => "luv",
            Self::LchUv => "lchuv",
            Self::Lab => "lab",
            Self::LchAb => "lchab",
        }
    }

    /// Reserved tags have no registered conversions.
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Lab | Self::LchAb)
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorModel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.key() == key)
            .ok_or_else(|| ColorError::UnknownModel(s.to_string()))
    }
}

/// Compile-time color model marker.
pub trait Model: Copy + Clone + Default + PartialEq + Send + Sync + fmt::Debug + 'static {
    /// Runtime tag of this model.
    const MODEL: ColorModel;
}

macro_rules! color_model {
    ($(#[$doc:meta])* $name:ident => $tag:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Model for $name {
            const MODEL: ColorModel = ColorModel::$tag;
        }
    };
}

color_model!(
    /// Display-referred RGB marker.
    Rgb => Rgb
);
color_model!(
    /// CIE XYZ marker.
    Xyz => Xyz
);
color_model!(
    /// CIE xyY marker.
    XyY => XyY
);
color_model!(
    /// CIE L*u*v* marker.
    Luv => Luv
);
color_model!(
    /// CIE LCh(uv) marker.
    LchUv => LchUv
);
color_model!(
    /// CIE L*a*b* marker (reserved).
    Lab => Lab
);
color_model!(
    /// CIE LCh(ab) marker (reserved).
    LchAb => LchAb
);

/// A triple tagged with its color model at the type level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color<M: Model> {
    value: [f64; 3],
    _model: PhantomData<M>,
}

impl<M: Model> Color<M> {
    /// Creates a color from components.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self::from_array([a, b, c])
    }

    /// Creates a color from an array.
    #[inline]
    pub const fn from_array(value: [f64; 3]) -> Self {
        Self {
            value,
            _model: PhantomData,
        }
    }

    /// Creates a color from a vector.
    #[inline]
    pub const fn from_vec3(v: Vec3) -> Self {
        Self::from_array(v.to_array())
    }

    /// Components as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        self.value
    }

    /// Components as a vector for matrix math.
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::from_array(self.value)
    }

    /// Runtime tag of this color's model.
    #[inline]
    pub const fn model(self) -> ColorModel {
        M::MODEL
    }

    /// Erases the type-level tag into a runtime one.
    #[inline]
    pub const fn into_any(self) -> AnyColor {
        AnyColor {
            model: M::MODEL,
            value: self.value,
        }
    }
}

/// A triple tagged with its color model at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnyColor {
    /// Model of `value`.
    pub model: ColorModel,
    /// Components.
    pub value: [f64; 3],
}

impl AnyColor {
    /// Creates a tagged triple.
    #[inline]
    pub const fn new(model: ColorModel, value: [f64; 3]) -> Self {
        Self { model, value }
    }

    /// Recovers the typed form.
    ///
    /// # Errors
    ///
    /// [`ColorError::ModelMismatch`] if the tag is not `M`.
    pub fn typed<M: Model>(self) -> ColorResult<Color<M>> {
        if self.model != M::MODEL {
            return Err(ColorError::ModelMismatch {
                expected: M::MODEL,
                actual: self.model,
            });
        }
        Ok(Color::from_array(self.value))
    }
}

impl<M: Model> From<Color<M>> for AnyColor {
    fn from(c: Color<M>) -> Self {
        c.into_any()
    }
}
