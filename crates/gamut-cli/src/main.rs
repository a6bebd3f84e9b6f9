//! gamut - RGB gamut geometry and color conversion CLI

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gamut_cache::{GamutConfig, RecordKind};
use gamut_color::ColorModel;
use gamut_primaries::{ColorSpace, Illuminant};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gamut")]
#[command(author, version, about = "RGB gamut geometry and color conversions")]
#[command(long_about = "
Builds boundary meshes of RGB gamuts in perceptual color models and
converts single colors between models.

Examples:
  gamut geometry --space display-p3 --model lchuv -d 32 -o p3.json
  gamut convert --from rgb --to luv 255 255 255
  gamut convert --from luv --to rgb --space pro-photo --illuminant d50 50 20 -30
  gamut locus --cmf cie1931.json --model xyy
  gamut --config gamut.yaml cache count --kind facets
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build gamut vertex data (positions, colors, indices) as JSON
    #[command(visible_alias = "g")]
    Geometry(GeometryArgs),

    /// Convert one color between models
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Map a color matching function table to a spectral locus
    Locus(LocusArgs),

    /// Inspect or clear the geometry cache
    #[command(subcommand)]
    Cache(CacheCommand),
}

#[derive(Args)]
struct GeometryArgs {
    /// RGB color space (default from config)
    #[arg(short, long)]
    space: Option<ColorSpace>,

    /// Target model: rgb, xyz, xyy, luv, lchuv
    #[arg(short, long, default_value = "lchuv")]
    model: ColorModel,

    /// Reference illuminant (default from config)
    #[arg(short, long)]
    illuminant: Option<Illuminant>,

    /// Lattice divisions, clamped to the configured maximum
    #[arg(short, long, default_value = "16")]
    divisions: u32,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct ConvertArgs {
    /// Source model
    #[arg(long)]
    from: ColorModel,

    /// Destination model
    #[arg(long)]
    to: ColorModel,

    /// RGB color space (default from config)
    #[arg(short, long)]
    space: Option<ColorSpace>,

    /// Reference illuminant (default from config)
    #[arg(short, long)]
    illuminant: Option<Illuminant>,

    /// Treat RGB as linear (skip the transfer curve)
    #[arg(long)]
    no_companding: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Three components in the source model
    #[arg(num_args = 3, required = true, allow_negative_numbers = true)]
    values: Vec<f64>,
}

#[derive(Args)]
struct LocusArgs {
    /// JSON array of {wavelength, x, y, z} rows
    #[arg(long)]
    cmf: PathBuf,

    /// Target model
    #[arg(short, long, default_value = "xyy")]
    model: ColorModel,

    /// RGB color space, used for an rgb target (default from config)
    #[arg(short, long)]
    space: Option<ColorSpace>,

    /// Reference illuminant (default from config)
    #[arg(short, long)]
    illuminant: Option<Illuminant>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum CacheCommand {
    /// Count stored records
    Count(CacheFilterArgs),
    /// Delete stored records
    Clear(CacheFilterArgs),
}

#[derive(Args)]
struct CacheFilterArgs {
    /// Only records of this kind
    #[arg(short, long)]
    kind: Option<KindArg>,

    /// Only records at this fidelity
    #[arg(short, long)]
    fidelity: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Positions,
    Colors,
    Facets,
}

impl From<KindArg> for RecordKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Positions => Self::Positions,
            KindArg::Colors => Self::Colors,
            KindArg::Facets => Self::Facets,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<GamutConfig> {
    match path {
        Some(p) => GamutConfig::from_file(p).with_context(|| format!("Failed to load config: {}", p.display())),
        None => Ok(GamutConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Geometry(args) => commands::geometry::run(args, config).await,
        Commands::Convert(args) => commands::convert::run(args, &config),
        Commands::Locus(args) => commands::locus::run(args, &config),
        Commands::Cache(cmd) => commands::cache::run(cmd, config).await,
    }
}
