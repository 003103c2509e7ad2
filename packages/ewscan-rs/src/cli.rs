//! Command line arguments backing the `ewscan` binary.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
  name = "ewscan",
  about = "A CLI tool for detecting e-waste in images and reporting disposal hazards",
  version
)]
pub struct Args {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print version information
  Version,
  /// Analyze an image and write a markdown report
  Analyze {
    /// Path of the image to analyze
    image: PathBuf,

    /// Output file path for the generated report
    #[arg(long, short = 'o', default_value = "report.md")]
    output_file_path: PathBuf,

    /// Write an SVG bounding-box overlay to this path
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Display size of the overlay canvas, e.g. 1280x960 (defaults to the
    /// image's intrinsic size)
    #[arg(long)]
    canvas_size: Option<String>,

    /// Base URL of the classification backend
    #[arg(long, default_value = ewscan_detect::DEFAULT_API_BASE)]
    api_base: String,

    /// Disable verbose output
    #[arg(long)]
    quiet: bool,
  },
  /// Look up hazard information for an e-waste type
  Hazards {
    /// E-waste type, e.g. "battery" or "lcd monitor"
    ewaste_type: String,

    /// Base URL of the classification backend
    #[arg(long, default_value = ewscan_detect::DEFAULT_API_BASE)]
    api_base: String,
  },
  /// Check whether the classification backend is reachable
  Health {
    /// Base URL of the classification backend
    #[arg(long, default_value = ewscan_detect::DEFAULT_API_BASE)]
    api_base: String,
  },
}
