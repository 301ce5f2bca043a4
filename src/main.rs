use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mapart::models::AppConfig;
use mapart::services::MapArtPipeline;
use mapart_core::{MapArtMaker, Rgb};

/// Config file picked up from the working directory when none is given
const DEFAULT_CONFIG_FILE: &str = "mapart.yaml";

#[derive(Parser)]
#[command(name = "mapart")]
#[command(about = "Minecraft map art generator - turns images into datapack functions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (overrides MAPART_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image into a datapack placement function
    Build {
        /// Source image (PNG or JPEG)
        #[arg(short, long)]
        image: PathBuf,

        /// Palette JSON file
        #[arg(short, long)]
        palette: PathBuf,

        /// Directory the datapack is created in (must exist)
        #[arg(short, long)]
        output: PathBuf,

        /// Match pixels on a single thread
        #[arg(long)]
        sequential: bool,
    },
    /// Validate a palette file and print a summary
    Palette {
        /// Palette JSON file
        #[arg(short, long)]
        palette: PathBuf,
    },
    /// Show which palette entry each colour maps to
    Probe {
        /// Palette JSON file
        #[arg(short, long)]
        palette: PathBuf,

        /// Colours as hex RGB (e.g. "#7F7F7F")
        #[arg(required = true)]
        colors: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mapart=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let Some(command) = cli.command else {
        run_status_command(cli.config.as_deref());
        return Ok(());
    };

    let mut config = load_config(cli.config)?;

    match command {
        Commands::Build {
            image,
            palette,
            output,
            sequential,
        } => {
            if sequential {
                config.matching.parallel = false;
            }
            run_build_command(config, &image, &palette, &output)
        }
        Commands::Palette { palette } => run_palette_command(config, &palette),
        Commands::Probe { palette, colors } => run_probe_command(config, &palette, &colors),
    }
}

/// Resolve the config file: `--config`, then `MAPART_CONFIG`, then
/// `./mapart.yaml` if present, otherwise defaults.
fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let path = explicit
        .or_else(|| std::env::var("MAPART_CONFIG").ok().map(PathBuf::from))
        .or_else(|| {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.is_file().then_some(local)
        });
    Ok(AppConfig::load(path.as_deref())?)
}

fn run_build_command(
    config: AppConfig,
    image: &Path,
    palette: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let pipeline = MapArtPipeline::new(Arc::new(config));
    let summary = pipeline.build(image, palette, output)?;

    let (low, high) = summary.height_range;
    println!("Map art built");
    println!("  Size:     {}x{}", summary.width, summary.height);
    println!("  Blocks:   {} distinct", summary.distinct_blocks);
    println!("  Heights:  {low}..={high} ({} levels)", high - low + 1);
    println!("  Commands: {}", summary.commands);
    println!("  Output:   {}", summary.function_path.display());
    Ok(())
}

fn run_palette_command(config: AppConfig, palette: &Path) -> anyhow::Result<()> {
    let pipeline = MapArtPipeline::new(Arc::new(config));
    let palette = pipeline.load_palette(palette)?;

    println!(
        "Palette: {} entries, {} blocks",
        palette.len(),
        palette.block_count()
    );
    for block in palette.block_ids() {
        let marker = if palette.needs_support(block) {
            " (needs support)"
        } else {
            ""
        };
        println!("  {block}{marker}");
    }
    Ok(())
}

fn run_probe_command(config: AppConfig, palette: &Path, colors: &[String]) -> anyhow::Result<()> {
    let pipeline = MapArtPipeline::new(Arc::new(config));
    let maker: MapArtMaker = pipeline.maker(pipeline.load_palette(palette)?);

    for text in colors {
        let rgb: Rgb = text
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid colour '{text}': {e}"))?;
        let found = maker.match_pixel(rgb);
        println!(
            "{text} -> {} ({}, distance {:.4})",
            found.block_id, found.elevation, found.distance
        );
    }
    Ok(())
}

fn run_status_command(config: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let env_config = std::env::var("MAPART_CONFIG").ok();

    println!("mapart v{VERSION} - Minecraft map art generator\n");
    println!("Environment Variables:");
    println!(
        "  MAPART_CONFIG = {}",
        env_config.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG      = {}",
        std::env::var("RUST_LOG").as_deref().unwrap_or("mapart=info (default)")
    );
    if let Some(path) = config {
        println!("\nConfig file: {}", path.display());
    }
    println!("\nRun 'mapart build --help' to get started.");
}
