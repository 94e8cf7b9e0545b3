use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lcdcode::config::Config;
use lcdcode::pipeline::{self, RunSummary};
use lcdcode::render::{OFFSET, RESERVED_FROM};
use lcdcode::types::Pixel;
use tracing_subscriber::EnvFilter;

mod render_png;
mod source;

/// Convert 4-digit asset IDs into single-row display PNGs
#[derive(Parser)]
#[command(name = "lcdcode", version)]
struct Cli {
    /// Log per-row progress
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every ID in an input list to `<output-dir>/<id>.png`
    Convert {
        /// TOML file with `input` and `output_dir` keys
        #[arg(long)]
        config: Option<PathBuf>,
        /// Input list, one 4-digit ID per line
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Show checksum, digit patterns and rendered row for one ID
    Show {
        /// 4-digit asset ID
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Convert {
            config,
            input,
            output_dir,
        } => {
            let config = resolve_config(config, input, output_dir)?;
            cmd_convert(&config)?;
            Ok(())
        }
        Command::Show { id } => cmd_show(&id),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer explicit flags over the optional config file over the defaults.
fn resolve_config(
    path: Option<PathBuf>,
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            Config::from_toml_str(&text)
                .with_context(|| format!("parsing config from {}", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(input) = input {
        config.input = input;
    }
    if let Some(output_dir) = output_dir {
        config.output_dir = output_dir;
    }
    Ok(config)
}

fn cmd_convert(config: &Config) -> Result<RunSummary> {
    let mut rows = source::open_rows(&config.input)?;
    let mut sink = render_png::PngDirSink::create(&config.output_dir)?;
    let summary = pipeline::run(&mut rows, &mut sink)
        .with_context(|| format!("converting {}", config.input.display()))?;
    tracing::info!(
        images = summary.rows,
        output_dir = %config.output_dir.display(),
        "wrote images"
    );
    Ok(summary)
}

fn cmd_show(id: &str) -> Result<()> {
    let (asset, row) = pipeline::convert_row(id, 1)?;
    let [c0, c1] = asset.checksum.digits();

    println!("Asset ID:      {}", asset.id);
    println!("Checksum:      {} ({c0}{c1})", asset.checksum.value());
    println!("Digits:");
    let digits = asset.checksum.digits().into_iter().chain(asset.id.digits());
    for (i, d) in digits.enumerate() {
        let bits = asset
            .encoding
            .get(i + 1)
            .with_context(|| format!("missing encoding for position {}", i + 1))?;
        println!("  {}: {d} -> {bits}", i + 1);
    }
    println!("Pattern:       {}", asset.pattern()?);

    let zone: String = (OFFSET..RESERVED_FROM)
        .map(|x| match row.pixel(x) {
            Pixel::Mark => '#',
            Pixel::Blank => '.',
        })
        .collect();
    println!("Row {OFFSET}..{RESERVED_FROM}:  {zone}");
    Ok(())
}
