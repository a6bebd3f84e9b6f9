//! Error types for color conversions.

use crate::ColorModel;
use gamut_math::MathError;
use gamut_primaries::RegistryError;
use thiserror::Error;

/// Color conversion error.
///
/// All variants are deterministic failures of pure computation; retrying
/// the same call yields the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Matrix operation failed (shape mismatch or singular matrix).
    #[error(transparent)]
    Math(#[from] MathError),

    /// Registry data is missing or invalid.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// No edge is registered for this model pair.
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedConversion {
        /// Source model.
        from: ColorModel,
        /// Destination model.
        to: ColorModel,
    },

    /// A tagged value was handed to a transform for another model.
    #[error("model mismatch: transform expects {expected}, value is {actual}")]
    ModelMismatch {
        /// Source model of the transform.
        expected: ColorModel,
        /// Tag carried by the value.
        actual: ColorModel,
    },

    /// A key string does not name a color model.
    #[error("unknown color model key: {0}")]
    UnknownModel(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
