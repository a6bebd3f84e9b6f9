//! Geometry command
//!
//! Builds vertex data through the cached geometry service.

use crate::GeometryArgs;
use anyhow::{Context, Result};
use gamut_cache::{AnyStore, GamutConfig, GeometryRequest, GeometryService};
use tracing::info;

pub async fn run(args: GeometryArgs, config: GamutConfig) -> Result<()> {
    let request = GeometryRequest {
        color_space: args.space.unwrap_or(config.default_space),
        target_model: args.model,
        illuminant: args.illuminant.unwrap_or(config.default_illuminant),
        divisions: args.divisions,
    };
    info!(
        space = %request.color_space,
        model = %request.target_model,
        illuminant = %request.illuminant,
        divisions = request.divisions,
        "Building geometry"
    );

    let store = AnyStore::from_config(&config.store).await.context("Failed to open store")?;
    let service = GeometryService::start(store, config)
        .await
        .context("Failed to load reference lattice")?;
    let vertices = service
        .vertex_data(&request)
        .await
        .with_context(|| format!("Failed to build {} geometry", request.color_space))?;

    info!(
        vertices = vertices.vertex_count(),
        triangles = vertices.triangle_count(),
        "Geometry ready"
    );
    let json = serde_json::to_value(&vertices)?;
    super::write_json(&json, args.output.as_deref(), args.pretty)
}
