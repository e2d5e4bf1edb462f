//! CLI argument definitions for oblique-gallery

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oblique-gallery")]
#[command(about = "Render rotated globes as oblique map projections")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render scenarios to SVG files
    Render(RenderArgs),

    /// Print the oblique parameters of a rotation sequence
    Params(ParamsArgs),

    /// List scenarios with their projection summaries
    List(ListArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// JSON scenario file (defaults to the built-in gallery)
    #[arg(long)]
    pub scenarios: Option<PathBuf>,

    /// Also render the built-in gallery when a scenario file is given
    #[arg(long)]
    pub builtin: bool,

    /// Directory for the SVG files
    #[arg(short, long, default_value = oblique_gallery::DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Render only these scenarios
    #[arg(long, num_args = 1..)]
    pub only: Vec<String>,

    /// GeoJSON land polygons
    #[arg(long)]
    pub features: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ParamsArgs {
    /// Rotation sequence, e.g. "Ry(-50) @ Rx(135) @ Ry(37) @ Rz(-137)"
    pub rotation: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser)]
pub struct ListArgs {
    /// JSON scenario file (defaults to the built-in gallery)
    #[arg(long)]
    pub scenarios: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
