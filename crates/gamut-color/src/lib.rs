//! # gamut-color
//!
//! Color models and the conversion graph between them.
//!
//! Values are `[f64; 3]` triples in one of these models:
//!
//! | Model | Components | Range |
//! |-------|------------|-------|
//! | RGB | r, g, b | [0, 255], display-referred |
//! | XYZ | X, Y, Z | white at Y = 1 |
//! | xyY | x, y, Y | chromaticity plus luminance |
//! | LUV | L, u, v | L in [0, 100] |
//! | LCHuv | L, C, h | h in degrees, [0, 360) |
//!
//! Conversions come in two flavours:
//!
//! - typed functions such as [`rgb_to_xyz`] or [`xyz_to_luv`], which take
//!   and return [`Color<M>`] so a triple in the wrong model does not compile
//! - [`transform`], which resolves a runtime model pair to a [`Transform`]
//!   for callers that only learn the models from a request; binding it to
//!   a space with [`Transform::prepare`] resolves the matrices once for a
//!   batch of points
//! - [`convert`], the typed form of the graph for models known statically
//!
//! Whenever the requested illuminant differs from an RGB space's native
//! one, XYZ values are adapted with Bradford.
//!
//! # Example
//!
//! ```rust
//! use gamut_color::{Color, Rgb, TransformOptions, rgb_to_xyz, xyz_to_luv};
//! use gamut_primaries::{Illuminant, SRGB};
//!
//! let red = Color::<Rgb>::new(255.0, 0.0, 0.0);
//! let xyz = rgb_to_xyz(red, &SRGB, Illuminant::D65, TransformOptions::default()).unwrap();
//! let luv = xyz_to_luv(xyz, Illuminant::D65).unwrap();
//! assert!((luv.to_array()[0] - 53.24).abs() < 0.01);
//! ```
//!
//! # Dependencies
//!
//! - `gamut-math` - matrices and Bradford adaptation
//! - `gamut-primaries` - color space and illuminant registry
//! - `gamut-transfer` - companding curves
//!
//! # Used By
//!
//! - `gamut-geometry` - mapping lattice points into target spaces

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod error;
mod graph;
mod luv;
mod model;
mod rgb;
mod xyy;

pub use adapt::{adapt_xyz, bradford_matrix};
pub use error::{ColorError, ColorResult};
pub use graph::{
    EdgeContext, EdgeFn, PreparedTransform, Transform, TransformOptions, convert, registered_edges, transform,
};
pub use luv::{CIE_EPSILON, CIE_KAPPA, lchuv_to_luv, luv_to_lchuv, luv_to_xyz, xyz_to_luv};
pub use model::{AnyColor, Color, ColorModel, LchAb, LchUv, Lab, Luv, Model, Rgb, XyY, Xyz};
pub use rgb::{RGB_SCALE, RgbConverter, rgb_to_xyz, xyz_to_rgb};
pub use xyy::{xyy_to_xyz, xyz_to_xyy};
