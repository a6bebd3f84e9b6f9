//! Natural keys and queries for cache records.

use gamut_color::ColorModel;
use gamut_primaries::{ColorSpace, Illuminant, RegistryError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a record holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Lattice points in a target model.
    Positions,
    /// Display colors per lattice point.
    Colors,
    /// Triangle indices.
    Facets,
}

impl RecordKind {
    /// Key used in record ids.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Positions => "positions",
            Self::Colors => "colors",
            Self::Facets => "facets",
        }
    }
}

/// Color space component of a key.
///
/// `Reference` marks records that do not depend on a color space: the
/// maximum-fidelity RGB lattice and facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SpaceKey {
    /// Space independent.
    Reference,
    /// A registered RGB space.
    Space(ColorSpace),
}

impl fmt::Display for SpaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => f.write_str("reference"),
            Self::Space(cs) => f.write_str(cs.key()),
        }
    }
}

impl FromStr for SpaceKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "reference" {
            return Ok(Self::Reference);
        }
        s.parse().map(Self::Space)
    }
}

impl From<SpaceKey> for String {
    fn from(k: SpaceKey) -> Self {
        k.to_string()
    }
}

impl TryFrom<String> for SpaceKey {
    type Error = RegistryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ColorSpace> for SpaceKey {
    fn from(cs: ColorSpace) -> Self {
        Self::Space(cs)
    }
}

/// Natural key of a cache record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    /// Record kind.
    pub kind: RecordKind,
    /// Color space, or the reference marker.
    pub space: SpaceKey,
    /// Model of the stored points.
    pub model: ColorModel,
    /// Reference white of the stored points, if any.
    pub illuminant: Option<Illuminant>,
    /// Lattice divisions.
    pub fidelity: u32,
}

impl CacheKey {
    /// The maximum-fidelity RGB lattice every request trims from.
    pub const fn reference(fidelity: u32) -> Self {
        Self {
            kind: RecordKind::Positions,
            space: SpaceKey::Reference,
            model: ColorModel::Rgb,
            illuminant: None,
            fidelity,
        }
    }

    /// Mapped lattice points.
    pub const fn positions(space: ColorSpace, model: ColorModel, illuminant: Illuminant, fidelity: u32) -> Self {
        Self {
            kind: RecordKind::Positions,
            space: SpaceKey::Space(space),
            model,
            illuminant: Some(illuminant),
            fidelity,
        }
    }

    /// Display colors; always RGB.
    pub const fn colors(space: ColorSpace, illuminant: Illuminant, fidelity: u32) -> Self {
        Self {
            kind: RecordKind::Colors,
            space: SpaceKey::Space(space),
            model: ColorModel::Rgb,
            illuminant: Some(illuminant),
            fidelity,
        }
    }

    /// Triangle indices; depend on fidelity only.
    pub const fn facets(fidelity: u32) -> Self {
        Self {
            kind: RecordKind::Facets,
            space: SpaceKey::Reference,
            model: ColorModel::Rgb,
            illuminant: None,
            fidelity,
        }
    }

    /// Canonical form: facet keys drop space, model and illuminant.
    pub const fn normalized(self) -> Self {
        match self.kind {
            RecordKind::Facets => Self::facets(self.fidelity),
            _ => self,
        }
    }

    /// Stable string id, e.g. `positions.srgb.luv.d65.16`.
    pub fn id(&self) -> String {
        let illuminant = self.illuminant.map_or("none", Illuminant::key);
        format!(
            "{}.{}.{}.{}.{}",
            self.kind.key(),
            self.space,
            self.model,
            illuminant,
            self.fidelity
        )
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// Filter over record keys; unset fields match anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordQuery {
    /// Record kind.
    pub kind: Option<RecordKind>,
    /// Color space.
    pub space: Option<SpaceKey>,
    /// Model.
    pub model: Option<ColorModel>,
    /// Illuminant; `Some(None)` matches records without one.
    pub illuminant: Option<Option<Illuminant>>,
    /// Divisions.
    pub fidelity: Option<u32>,
}

impl RecordQuery {
    /// Matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches exactly `key` (after normalization).
    pub fn exact(key: &CacheKey) -> Self {
        let key = key.normalized();
        Self {
            kind: Some(key.kind),
            space: Some(key.space),
            model: Some(key.model),
            illuminant: Some(key.illuminant),
            fidelity: Some(key.fidelity),
        }
    }

    /// Restricts to one kind.
    #[must_use]
    pub fn kind(mut self, kind: RecordKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restricts to one space.
    #[must_use]
    pub fn space(mut self, space: impl Into<SpaceKey>) -> Self {
        self.space = Some(space.into());
        self
    }

    /// Restricts to one fidelity.
    #[must_use]
    pub fn fidelity(mut self, fidelity: u32) -> Self {
        self.fidelity = Some(fidelity);
        self
    }

    /// The single key this query pins down, if every field is set.
    pub fn as_key(&self) -> Option<CacheKey> {
        Some(CacheKey {
            kind: self.kind?,
            space: self.space?,
            model: self.model?,
            illuminant: self.illuminant?,
            fidelity: self.fidelity?,
        })
    }

    /// Whether `key` passes this filter.
    pub fn matches(&self, key: &CacheKey) -> bool {
        self.kind.is_none_or(|k| k == key.kind)
            && self.space.is_none_or(|s| s == key.space)
            && self.model.is_none_or(|m| m == key.model)
            && self.illuminant.is_none_or(|i| i == key.illuminant)
            && self.fidelity.is_none_or(|f| f == key.fidelity)
    }
}
