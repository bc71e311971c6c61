//! Extract command implementation

use std::path::Path;
use std::process::ExitCode;

use image::GenericImageView;

use super::{share, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::config::{load_config, merge_cli_overrides, CliOverrides};
use crate::engine::{extract, Extraction};
use crate::error::ExtractError;
use crate::export::{palette_doc, write_palette_json};
use crate::scan::{Orientation, ScanMode};
use crate::swatch::write_swatches;

/// Execute the extract command
#[allow(clippy::too_many_arguments)]
pub fn run_extract(
    input: &Path,
    output: Option<&Path>,
    json: Option<&Path>,
    max_colors: Option<usize>,
    min_percentage: Option<f64>,
    threshold: Option<f64>,
    ignore: &[String],
    scan_mode: Option<ScanMode>,
    orientation: Option<Orientation>,
    swatch_size: Option<u32>,
    config_path: Option<&Path>,
    quiet: bool,
) -> ExitCode {
    // Validate numeric flags before doing any work
    if let Some(pct) = min_percentage {
        if !(0.0..=100.0).contains(&pct) {
            eprintln!("Error: --min-percentage must be between 0 and 100");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    }
    if let Some(t) = threshold {
        if !t.is_finite() || t < 0.0 {
            eprintln!("Error: --threshold must be a non-negative number");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    }

    let mut config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let overrides = CliOverrides {
        max_colors,
        min_percentage,
        threshold,
        ignore_colors: if ignore.is_empty() { None } else { Some(ignore.to_vec()) },
        scan_mode,
        orientation,
        swatch_size,
    };
    merge_cli_overrides(&mut config, &overrides);

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("Error: {}", e);
        }
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    // Cannot fail after validate
    let options = match config.extract_options() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let img = match image::open(input) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Error: Failed to open '{}': {}", input.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let (width, height) = img.dimensions();

    let extraction = match extract(&img, &options) {
        Ok(x) => x,
        Err(e @ ExtractError::PaletteTooLarge { .. }) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    for warning in &extraction.warnings {
        eprintln!("Warning: {}", warning);
    }

    if !quiet {
        print_analysis(input, &extraction);
    }

    if let Some(dir) = output {
        match write_swatches(&extraction.colors, dir, config.swatch.size) {
            Ok(paths) => {
                println!("Wrote {} swatches to {}", paths.len(), dir.display())
            }
            Err(e) => {
                eprintln!("Error: Failed to write swatches: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    if let Some(path) = json {
        let name = input.file_stem().unwrap_or_default().to_string_lossy().to_string();
        let doc = palette_doc(&name, width, height, &extraction);
        if let Err(e) = write_palette_json(&doc, path) {
            eprintln!("Error: Failed to write '{}': {}", path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
        println!("Wrote palette descriptor: {}", path.display());
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Print pixel stats, the removal log, and the surviving palette.
fn print_analysis(input: &Path, extraction: &Extraction) {
    let stats = &extraction.stats;
    println!("Pixel analysis for {}:", input.display());
    println!("  sampled:    {}", stats.sampled);
    println!("  ignored:    {} ({:.1}%)", stats.ignored, share(stats.ignored, stats.sampled));
    println!(
        "  considered: {} ({:.1}%)",
        stats.considered,
        share(stats.considered, stats.sampled)
    );

    if !extraction.removals.is_empty() {
        println!(
            "Reduced {} colors to {}:",
            extraction.colors.len() + extraction.removals.len(),
            extraction.colors.len()
        );
        for removal in &extraction.removals {
            println!(
                "  removed {} ({:.2}% of considered pixels, mean distance {:.2})",
                removal.color.to_hex(),
                removal.percentage,
                removal.mean_distance
            );
        }
    }

    println!("Palette ({} colors):", extraction.colors.len());
    for (i, entry) in extraction.table.iter().enumerate() {
        println!(
            "  {}: {} ({:.2}% of considered pixels)",
            i,
            entry.color.to_hex(),
            entry.percentage
        );
    }
}
