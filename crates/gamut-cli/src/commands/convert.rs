//! Convert command

use crate::ConvertArgs;
use anyhow::{Context, Result, bail};
use gamut_cache::GamutConfig;
use gamut_color::{AnyColor, TransformOptions, transform};
use tracing::debug;

pub fn run(args: ConvertArgs, config: &GamutConfig) -> Result<()> {
    let [a, b, c] = args.values[..] else {
        bail!("expected three components, got {}", args.values.len());
    };
    let space = args.space.unwrap_or(config.default_space);
    let illuminant = args.illuminant.unwrap_or(config.default_illuminant);
    let options = TransformOptions {
        companding: !args.no_companding,
    };
    debug!(from = %args.from, to = %args.to, %space, %illuminant, ?options, "Converting");

    let t = transform(args.from, args.to)?;
    let out = t
        .apply_any(AnyColor::new(args.from, [a, b, c]), space.data(), illuminant, options)
        .with_context(|| format!("Failed to convert {} -> {}", args.from, args.to))?;

    if args.json {
        super::write_json(&serde_json::to_value(out)?, None, false)
    } else {
        println!("{} {} {}", out.value[0], out.value[1], out.value[2]);
        Ok(())
    }
}
