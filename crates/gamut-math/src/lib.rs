//! # gamut-math
//!
//! Linear algebra primitives for the gamut-rs color pipeline.
//!
//! - [`Matrix`] - dense row-major matrices of any shape
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ and adaptation transforms
//! - [`Vec3`] - color triplets
//! - Chromatic adaptation ([`BRADFORD`], [`adaptation_matrix`])
//!
//! # Design
//!
//! Every operation is pure: inputs are borrowed or copied, results are freshly
//! allocated. Fallible operations return [`MathResult`] instead of sentinel
//! values, so a singular primary matrix surfaces as an error rather than a
//! silently substituted identity.
//!
//! All matrices use **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use gamut_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = m * Vec3::new(1.0, 0.5, 0.25);
//! let back = m.inverse().unwrap() * xyz;
//! assert!((back.x - 1.0).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `gamut-primaries` - RGB/XYZ matrix derivation
//! - `gamut-color` - conversions and chromatic adaptation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod error;
mod mat3;
mod matrix;
mod vec3;

pub use adapt::*;
pub use error::{MathError, MathResult};
pub use mat3::*;
pub use matrix::Matrix;
pub use vec3::Vec3;
