//! Error types for the cache and service layer.

use crate::ConfigError;
use gamut_color::ColorError;
use gamut_geometry::GeometryError;
use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache error.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The document store failed an I/O operation. Not retried.
    #[error("document store unavailable during {operation}: {source}")]
    StoreUnavailable {
        /// Store operation that failed.
        operation: &'static str,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A stored record could not be decoded or has the wrong artifact.
    #[error("corrupt cache record {id}: {reason}")]
    CorruptRecord {
        /// Natural key of the record.
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Geometry generation failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Color conversion failed.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CacheError {
    pub(crate) fn store(operation: &'static str, source: std::io::Error) -> Self {
        Self::StoreUnavailable { operation, source }
    }

    pub(crate) fn corrupt(id: impl Into<String>, reason: impl ToString) -> Self {
        Self::CorruptRecord {
            id: id.into(),
            reason: reason.to_string(),
        }
    }
}
