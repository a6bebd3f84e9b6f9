//! # gamut-transfer
//!
//! Companding: the encode/decode step between display-referred RGB and
//! linear light.
//!
//! Two curve families cover every registered RGB space:
//!
//! | Family | Parameters | Used by |
//! |--------|------------|---------|
//! | [`gamma`] | gamma | Adobe RGB, Adobe Wide Gamut, ProPhoto, Apple RGB |
//! | [`piecewise`] | alpha, gamma | sRGB, Display P3 |
//!
//! A color space stores a [`Companding`] tag; conversions call
//! [`Companding::curve`] once and then apply the resulting [`TransferCurve`]
//! per component.
//!
//! # Usage
//!
//! ```rust
//! use gamut_transfer::Companding;
//!
//! let srgb = Companding::Piecewise { alpha: 1.055, gamma: 2.4 }.curve();
//! let linear = srgb.linearize_rgb([0.5, 0.5, 0.5]);
//! let back = srgb.delinearize_rgb(linear);
//! assert!((back[0] - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `gamut-primaries` - per-space transfer parameters
//! - `gamut-color` - RGB <-> XYZ conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod piecewise;

use piecewise::PiecewiseParams;

/// Transfer-function tag with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Companding {
    /// No transfer function: values are already linear.
    Linear,
    /// Pure power law.
    Gamma {
        /// Exponent applied when decoding.
        gamma: f64,
    },
    /// Linear segment near black plus offset power law.
    Piecewise {
        /// Power-law scale (1.055 for sRGB).
        alpha: f64,
        /// Power-law exponent (2.4 for sRGB).
        gamma: f64,
    },
}

impl Companding {
    /// Short method name for logs and serialized metadata.
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Gamma { .. } => "gamma",
            Self::Piecewise { .. } => "piecewise",
        }
    }

    /// Whether the parameters describe a usable curve.
    ///
    /// Gamma needs a finite positive exponent. Piecewise needs finite
    /// `alpha > 1` and `gamma > 1`, otherwise `phi` is 0 or infinite.
    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Linear => true,
            Self::Gamma { gamma } => gamma.is_finite() && gamma > 0.0,
            Self::Piecewise { alpha, gamma } => {
                alpha.is_finite() && gamma.is_finite() && alpha > 1.0 && gamma > 1.0
            }
        }
    }

    /// Resolves derived parameters once for repeated use.
    pub fn curve(&self) -> TransferCurve {
        match *self {
            Self::Linear => TransferCurve::Linear,
            Self::Gamma { gamma } => TransferCurve::Gamma(gamma),
            Self::Piecewise { alpha, gamma } => {
                TransferCurve::Piecewise(PiecewiseParams::new(alpha, gamma))
            }
        }
    }
}

/// A companding curve with derived parameters resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferCurve {
    /// Identity.
    Linear,
    /// Pure power law with the given exponent.
    Gamma(f64),
    /// Piecewise curve.
    Piecewise(PiecewiseParams),
}

impl TransferCurve {
    /// Decodes one component to linear light.
    #[inline]
    pub fn linearize(&self, v: f64) -> f64 {
        match self {
            Self::Linear => v,
            Self::Gamma(g) => gamma::linearize(v, *g),
            Self::Piecewise(p) => p.linearize(v),
        }
    }

    /// Encodes one linear component.
    #[inline]
    pub fn delinearize(&self, l: f64) -> f64 {
        match self {
            Self::Linear => l,
            Self::Gamma(g) => gamma::delinearize(l, *g),
            Self::Piecewise(p) => p.delinearize(l),
        }
    }

    /// Decodes an RGB triplet.
    #[inline]
    pub fn linearize_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|v| self.linearize(v))
    }

    /// Encodes an RGB triplet.
    #[inline]
    pub fn delinearize_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|v| self.delinearize(v))
    }
}
