//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod analyze;
mod extract;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;

use crate::scan::{Orientation, ScanMode};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Find all PNG images in a directory (recursively), sorted by path.
pub fn find_palette_images(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(paths) = glob(&format!("{}/**/*.png", dir.display())) {
        files.extend(paths.filter_map(Result::ok));
    }
    files.sort();
    files
}

/// Palex - extract and reduce color palettes from texture images
#[derive(Parser)]
#[command(name = "palex")]
#[command(about = "Palex - extract and reduce color palettes from texture images")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a palette from an image and write swatches or a descriptor
    Extract {
        /// Input image to extract from
        input: PathBuf,

        /// Directory to write numbered swatch PNGs into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a JSON palette descriptor to this path
        #[arg(long)]
        json: Option<PathBuf>,

        /// Maximum number of colors to keep (omit for no reduction)
        #[arg(long)]
        max_colors: Option<usize>,

        /// Minimum share of considered pixels a color needs, 0-100
        #[arg(long)]
        min_percentage: Option<f64>,

        /// Ignore-list distance threshold (0 = exact matches only)
        #[arg(long)]
        threshold: Option<f64>,

        /// Hex color to ignore (repeatable); replaces configured colors
        #[arg(long = "ignore", value_name = "HEX")]
        ignore: Vec<String>,

        /// Which pixels to sample
        #[arg(long, value_enum)]
        scan_mode: Option<ScanMode>,

        /// Strip axis for row scans of square images
        #[arg(long, value_enum)]
        orientation: Option<Orientation>,

        /// Edge length of swatch tiles in pixels
        #[arg(long)]
        swatch_size: Option<u32>,

        /// Path to palex.toml (default: discovered by walking up)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Suppress the pixel analysis printout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print color frequencies and pixel stats without filtering or reduction
    Analyze {
        /// Images to analyze
        #[arg(required_unless_present = "dir")]
        files: Vec<PathBuf>,

        /// Directory to scan for .png files
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Hex color to ignore (repeatable)
        #[arg(long = "ignore", value_name = "HEX")]
        ignore: Vec<String>,

        /// Ignore-list distance threshold (0 = exact matches only)
        #[arg(long)]
        threshold: Option<f64>,

        /// Which pixels to sample
        #[arg(long, value_enum)]
        scan_mode: Option<ScanMode>,

        /// Strip axis for row scans of square images
        #[arg(long, value_enum)]
        orientation: Option<Orientation>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            json,
            max_colors,
            min_percentage,
            threshold,
            ignore,
            scan_mode,
            orientation,
            swatch_size,
            config,
            quiet,
        } => extract::run_extract(
            &input,
            output.as_deref(),
            json.as_deref(),
            max_colors,
            min_percentage,
            threshold,
            &ignore,
            scan_mode,
            orientation,
            swatch_size,
            config.as_deref(),
            quiet,
        ),
        Commands::Analyze { files, dir, ignore, threshold, scan_mode, orientation } => {
            analyze::run_analyze(
                &files,
                dir.as_deref(),
                &ignore,
                threshold,
                scan_mode,
                orientation,
            )
        }
    }
}

/// Percentage of `part` in `total`, 0 when nothing was sampled.
pub(crate) fn share(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
