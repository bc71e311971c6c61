//! Analyze command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{find_palette_images, share, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::color::parse_color;
use crate::engine::{extract, ExtractOptions};
use crate::ignore::IgnoreList;
use crate::scan::{Orientation, ScanMode};

/// Execute the analyze command
pub fn run_analyze(
    files: &[PathBuf],
    dir: Option<&Path>,
    ignore: &[String],
    threshold: Option<f64>,
    scan_mode: Option<ScanMode>,
    orientation: Option<Orientation>,
) -> ExitCode {
    let threshold = threshold.unwrap_or(0.0);
    if !threshold.is_finite() || threshold < 0.0 {
        eprintln!("Error: --threshold must be a non-negative number");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let mut ignore_colors = Vec::with_capacity(ignore.len());
    for s in ignore {
        match parse_color(s) {
            Ok(c) => ignore_colors.push(c),
            Err(e) => {
                eprintln!("Error: --ignore '{}': {}", s, e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    }

    let mut targets: Vec<PathBuf> = files.to_vec();
    if let Some(d) = dir {
        targets.extend(find_palette_images(d));
    }
    if targets.is_empty() {
        eprintln!("Error: no images to analyze");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    // Full frequency table: no budget, no prevalence filter
    let options = ExtractOptions {
        ignore: IgnoreList::new(ignore_colors, threshold),
        scan_mode: scan_mode.unwrap_or_default(),
        orientation,
        ..Default::default()
    };

    let mut failures = 0;
    for path in &targets {
        let img = match image::open(path) {
            Ok(i) => i,
            Err(e) => {
                eprintln!("Error: Failed to open '{}': {}", path.display(), e);
                failures += 1;
                continue;
            }
        };

        match extract(&img, &options) {
            Ok(result) => {
                for warning in &result.warnings {
                    eprintln!("Warning: {}", warning);
                }
                let stats = &result.stats;
                println!("Pixel analysis for {}:", path.display());
                println!("  sampled:    {}", stats.sampled);
                println!(
                    "  ignored:    {} ({:.1}%)",
                    stats.ignored,
                    share(stats.ignored, stats.sampled)
                );
                println!(
                    "  considered: {} ({:.1}%)",
                    stats.considered,
                    share(stats.considered, stats.sampled)
                );
                println!("Colors (first-seen order):");
                for entry in result.table.iter() {
                    println!(
                        "  {} {:.2}% ({} px)",
                        entry.color.to_hex(),
                        entry.percentage,
                        entry.count
                    );
                }
            }
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
