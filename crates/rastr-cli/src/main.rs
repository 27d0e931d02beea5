//! rastr - raster container and line rasterizer driver
//!
//! Draws demo lines, annotates existing images and prints image statistics.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rastr")]
#[command(author, version, about = "Raster image container and line rasterizer")]
#[command(long_about = "
Draws clipped Bresenham lines into raster images and reads/writes them as
PNG, JPEG or raw element dumps.

Examples:
  rastr lines out.png                   # 512x512 white canvas, two diagonals
  rastr lines out.jpg --size 1024
  rastr annotate photo.jpg marked.png   # red/green cross in the top-left 256x256
  rastr annotate photo.jpg marked.png --frame
  rastr info marked.png                 # size, format, per-channel stats
  RUST_LOG=rastr_io=trace rastr info photo.jpg
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the two-diagonal demo scene
    #[command(visible_alias = "l")]
    Lines(LinesArgs),

    /// Draw a cross over an existing image
    #[command(visible_alias = "a")]
    Annotate(AnnotateArgs),

    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct LinesArgs {
    /// Output file (.png, .jpg or .raw)
    output: PathBuf,

    /// Canvas width and height in pixels
    #[arg(short, long, default_value = "512", value_parser = clap::value_parser!(u32).range(1..=65535))]
    size: u32,
}

#[derive(Args)]
struct AnnotateArgs {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    /// Output file (.png, .jpg or .raw)
    output: PathBuf,

    /// Also outline the whole image
    #[arg(short, long)]
    frame: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Lines(args) => commands::lines::run(args, cli.verbose),
        Commands::Annotate(args) => commands::annotate::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
