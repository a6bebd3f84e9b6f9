//! Error types for registry lookups and matrix derivation.

use gamut_math::MathError;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// Reference data required by a conversion is absent or unusable.
    #[error("missing reference data for {space}: {field}")]
    MissingReferenceData {
        /// Color space (or illuminant) the data belongs to.
        space: String,
        /// Which datum is missing: `primaries` or `whitepoint`.
        field: &'static str,
    },

    /// A key string does not name a registered entry.
    #[error("unknown {kind} key: {key}")]
    UnknownKey {
        /// Table searched (`color space`, `illuminant`).
        kind: &'static str,
        /// Key that failed to parse.
        key: String,
    },

    /// Matrix derivation failed.
    #[error(transparent)]
    Math(#[from] MathError),
}
