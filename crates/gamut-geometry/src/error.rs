//! Error types for geometry generation.

use gamut_color::ColorError;
use thiserror::Error;

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Geometry error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Divisions outside `1..=max`.
    #[error("invalid lattice divisions {divisions}: expected 1..={max}")]
    InvalidDivisions {
        /// Requested divisions.
        divisions: u32,
        /// Largest supported value.
        max: u32,
    },

    /// Trim target finer than the source lattice.
    #[error("cannot trim a {available}-division lattice to {requested} divisions")]
    LatticeFidelity {
        /// Divisions of the source lattice.
        available: u32,
        /// Requested divisions.
        requested: u32,
    },

    /// Paths do not match the lattice's own divisions.
    #[error("malformed {divisions}-division lattice: {reason}")]
    MalformedLattice {
        /// Divisions the lattice claims.
        divisions: u32,
        /// What does not fit.
        reason: String,
    },

    /// Color matching function table is unusable.
    #[error("invalid CMF table: {reason}")]
    InvalidCmfTable {
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Position and color lattices disagree in size.
    #[error("vertex buffers disagree: {positions} positions, {colors} colors")]
    MismatchedBuffers {
        /// Position count.
        positions: usize,
        /// Color count.
        colors: usize,
    },

    /// Point conversion failed.
    #[error(transparent)]
    Color(#[from] ColorError),
}
