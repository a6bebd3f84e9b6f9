//! Request-level geometry service.

use crate::{Artifact, CacheKey, CacheResult, DocumentStore, GamutConfig, GeometryCache};
use gamut_color::ColorModel;
use gamut_geometry::{
    GeometryLattice, VertexData, generate_lattice, lattice_facets, map_colors, map_positions, trim_or_keep,
};
use gamut_primaries::{ColorSpace, Illuminant};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// One geometry request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryRequest {
    /// RGB space whose gamut is drawn.
    pub color_space: ColorSpace,
    /// Model the positions are expressed in.
    pub target_model: ColorModel,
    /// Reference white.
    pub illuminant: Illuminant,
    /// Requested divisions; clamped by the service.
    pub divisions: u32,
}

/// Serves positions, colors and facets through a [`GeometryCache`].
///
/// Every lattice is trimmed from one reference lattice generated at
/// `reference_divisions`, which is itself a cache record.
#[derive(Debug)]
pub struct GeometryService<S> {
    cache: GeometryCache<S>,
    config: GamutConfig,
    reference: OnceCell<GeometryLattice>,
}

impl<S: DocumentStore> GeometryService<S> {
    /// Creates a service over `store`.
    pub fn new(store: S, config: GamutConfig) -> Self {
        Self {
            cache: GeometryCache::new(store),
            config,
            reference: OnceCell::new(),
        }
    }

    /// Creates a service and loads or builds the reference lattice before
    /// the first request.
    ///
    /// # Errors
    ///
    /// As for [`GeometryService::ensure_reference`].
    pub async fn start(store: S, config: GamutConfig) -> CacheResult<Self> {
        let service = Self::new(store, config);
        let reference = service.ensure_reference().await?;
        debug!(divisions = reference.divisions, "Reference lattice ready");
        Ok(service)
    }

    /// The cache.
    pub fn cache(&self) -> &GeometryCache<S> {
        &self.cache
    }

    /// Active configuration.
    pub fn config(&self) -> &GamutConfig {
        &self.config
    }

    /// Clamps requested divisions to `[1, max_divisions]`.
    pub fn clamp_divisions(&self, divisions: u32) -> u32 {
        divisions.clamp(1, self.config.max_divisions.max(1))
    }

    /// Loads or builds the reference lattice; later calls are free.
    ///
    /// # Errors
    ///
    /// Store failures, or a corrupt reference record.
    pub async fn ensure_reference(&self) -> CacheResult<&GeometryLattice> {
        self.reference
            .get_or_try_init(|| async {
                let divisions = self.config.reference_divisions();
                let record = self
                    .cache
                    .get_or_create(CacheKey::reference(divisions), || async move {
                        info!(divisions, "Generating reference lattice");
                        Ok(Artifact::Lattice(generate_lattice(divisions)?))
                    })
                    .await?;
                record.into_lattice()
            })
            .await
    }

    /// Unit-cube lattice at (clamped) `divisions`, trimmed from the reference.
    ///
    /// # Errors
    ///
    /// As for [`GeometryService::ensure_reference`].
    pub async fn lattice(&self, divisions: u32) -> CacheResult<GeometryLattice> {
        let reference = self.ensure_reference().await?;
        Ok(trim_or_keep(reference, self.clamp_divisions(divisions))?)
    }

    /// Positions for `request`.
    ///
    /// # Errors
    ///
    /// Store, geometry and conversion failures.
    pub async fn positions(&self, request: &GeometryRequest) -> CacheResult<GeometryLattice> {
        let lattice = self.lattice(request.divisions).await?;
        let key = CacheKey::positions(
            request.color_space,
            request.target_model,
            request.illuminant,
            lattice.divisions,
        );
        let record = self
            .cache
            .get_or_create(key, || async {
                let mapped = map_positions(
                    &lattice,
                    request.color_space.data(),
                    request.target_model,
                    request.illuminant,
                )?;
                Ok(Artifact::Lattice(mapped))
            })
            .await?;
        record.into_lattice()
    }

    /// Display colors for `request`.
    ///
    /// # Errors
    ///
    /// Store, geometry and conversion failures.
    pub async fn colors(&self, request: &GeometryRequest) -> CacheResult<GeometryLattice> {
        let lattice = self.lattice(request.divisions).await?;
        let key = CacheKey::colors(request.color_space, request.illuminant, lattice.divisions);
        let record = self
            .cache
            .get_or_create(key, || async {
                let colors = map_colors(&lattice, request.color_space.data(), request.illuminant)?;
                Ok(Artifact::Lattice(colors))
            })
            .await?;
        record.into_lattice()
    }

    /// Facets for a lattice at `divisions` (used as given, not clamped).
    ///
    /// # Errors
    ///
    /// Store failures and invalid divisions.
    pub async fn facets(&self, divisions: u32) -> CacheResult<Vec<[u32; 3]>> {
        let record = self
            .cache
            .get_or_create(CacheKey::facets(divisions), || async move {
                Ok(Artifact::Facets(lattice_facets(divisions)?))
            })
            .await?;
        record.into_facets()
    }

    /// Positions, colors and facets assembled for rendering.
    ///
    /// # Errors
    ///
    /// Any failure of the three parts.
    pub async fn vertex_data(&self, request: &GeometryRequest) -> CacheResult<VertexData> {
        let positions = self.positions(request).await?;
        let colors = self.colors(request).await?;
        let facets = self.facets(positions.divisions).await?;
        debug!(
            space = %request.color_space,
            model = %request.target_model,
            divisions = positions.divisions,
            "Assembled vertex data"
        );
        Ok(VertexData::new(&positions, &colors, &facets)?)
    }
}
