//! Spectral locus command

use crate::LocusArgs;
use anyhow::{Context, Result};
use gamut_cache::GamutConfig;
use gamut_geometry::{CmfRow, spectral_locus};
use tracing::info;

pub fn run(args: LocusArgs, config: &GamutConfig) -> Result<()> {
    let text = std::fs::read_to_string(&args.cmf)
        .with_context(|| format!("Failed to read CMF table: {}", args.cmf.display()))?;
    let rows: Vec<CmfRow> = serde_json::from_str(&text).context("CMF table is not a JSON array of rows")?;

    let space = args.space.unwrap_or(config.default_space);
    let illuminant = args.illuminant.unwrap_or(config.default_illuminant);
    let points = spectral_locus(&rows, args.model, space.data(), illuminant)?;
    info!(rows = rows.len(), model = %args.model, "Spectral locus mapped");

    let json = serde_json::json!({
        "model": args.model,
        "wavelengths": rows.iter().map(|r| r.wavelength).collect::<Vec<_>>(),
        "points": points,
    });
    super::write_json(&json, args.output.as_deref(), false)
}
