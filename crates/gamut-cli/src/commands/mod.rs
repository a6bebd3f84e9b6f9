//! CLI command implementations

pub mod cache;
pub mod convert;
pub mod geometry;
pub mod locus;

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Writes JSON to `output`, or to stdout when no path is given.
pub fn write_json(value: &Value, output: Option<&Path>, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match output {
        Some(path) => std::fs::write(path, text).with_context(|| format!("Failed to write: {}", path.display())),
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{text}").context("Failed to write to stdout")
        }
    }
}
