//! Stored records.

use crate::{CacheError, CacheKey, CacheResult, RecordKind};
use gamut_geometry::GeometryLattice;
use serde::{Deserialize, Serialize};

/// Payload of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Artifact {
    /// Positions or colors.
    Lattice(GeometryLattice),
    /// Triangle indices.
    Facets(Vec<[u32; 3]>),
}

/// One cached document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Natural key.
    pub key: CacheKey,
    /// Payload.
    pub artifact: Artifact,
}

impl CacheRecord {
    /// Creates a record under the normalized form of `key`.
    pub fn new(key: CacheKey, artifact: Artifact) -> Self {
        Self {
            key: key.normalized(),
            artifact,
        }
    }

    /// Lattice payload of a positions or colors record.
    ///
    /// # Errors
    ///
    /// [`CacheError::CorruptRecord`] if the payload does not fit the kind or
    /// its paths do not fit its divisions.
    pub fn into_lattice(self) -> CacheResult<GeometryLattice> {
        match (self.key.kind, self.artifact) {
            (RecordKind::Positions | RecordKind::Colors, Artifact::Lattice(l)) => {
                l.validate().map_err(|e| CacheError::corrupt(self.key.id(), e))?;
                Ok(l)
            }
            (kind, _) => Err(CacheError::corrupt(
                self.key.id(),
                format!("{} record without a lattice", kind.key()),
            )),
        }
    }

    /// Facet payload of a facets record.
    ///
    /// # Errors
    ///
    /// [`CacheError::CorruptRecord`] if the payload does not fit the kind.
    pub fn into_facets(self) -> CacheResult<Vec<[u32; 3]>> {
        match (self.key.kind, self.artifact) {
            (RecordKind::Facets, Artifact::Facets(f)) => Ok(f),
            (kind, _) => Err(CacheError::corrupt(
                self.key.id(),
                format!("{} record without facets", kind.key()),
            )),
        }
    }
}
