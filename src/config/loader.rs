//! Configuration loading and discovery for `palex.toml`
//!
//! Provides functions to find, load, and merge configuration.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::schema::PalexConfig;
use crate::scan::{Orientation, ScanMode};

/// File name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "palex.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read palex.toml: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse palex.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Invalid palex.toml:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the palette size budget
    pub max_colors: Option<usize>,
    /// Override the minimum pixel percentage
    pub min_percentage: Option<f64>,
    /// Override the ignore distance threshold
    pub threshold: Option<f64>,
    /// Replace the ignore colors entirely
    pub ignore_colors: Option<Vec<String>>,
    /// Override the scan mode
    pub scan_mode: Option<ScanMode>,
    /// Override the strip orientation
    pub orientation: Option<Orientation>,
    /// Override the swatch tile size
    pub swatch_size: Option<u32>,
}

/// Find palex.toml by walking up from the current working directory,
/// falling back to `$XDG_CONFIG_HOME/palex/palex.toml` (or
/// `~/.config/palex/palex.toml`).
pub fn find_config() -> Option<PathBuf> {
    env::current_dir()
        .ok()
        .and_then(|cwd| find_config_from(&cwd))
        .or_else(find_xdg_config)
}

fn find_xdg_config() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

    let candidate = base.join("palex").join(CONFIG_FILE_NAME);
    candidate.exists().then_some(candidate)
}

/// Find palex.toml in `start` or the nearest ancestor directory that has
/// one.
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.exists())
}

/// Load configuration from a palex.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// [`find_config`] to locate one. If no config file is found, returns the
/// default (permissive) configuration.
pub fn load_config(path: Option<&Path>) -> Result<PalexConfig, ConfigError> {
    match path.map(Path::to_path_buf).or_else(find_config) {
        Some(found) => load_config_file(&found),
        None => Ok(PalexConfig::default()),
    }
}

fn load_config_file(path: &Path) -> Result<PalexConfig, ConfigError> {
    let config: PalexConfig = toml::from_str(&fs::read_to_string(path)?)?;

    let problems = config.validate();
    if problems.is_empty() {
        Ok(config)
    } else {
        Err(ConfigError::Validation(problems))
    }
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values. A non-empty
/// `--ignore` list replaces the configured colors outright rather than
/// appending to them.
pub fn merge_cli_overrides(config: &mut PalexConfig, overrides: &CliOverrides) {
    if let Some(max_colors) = overrides.max_colors {
        config.extract.max_colors = Some(max_colors);
    }

    if let Some(min_percentage) = overrides.min_percentage {
        config.extract.min_percentage = min_percentage;
    }

    if let Some(threshold) = overrides.threshold {
        config.ignore.threshold = threshold;
    }

    if let Some(ref colors) = overrides.ignore_colors {
        config.ignore.colors = colors.clone();
    }

    if let Some(scan_mode) = overrides.scan_mode {
        config.extract.scan_mode = scan_mode;
    }

    if let Some(orientation) = overrides.orientation {
        config.extract.orientation = Some(orientation);
    }

    if let Some(swatch_size) = overrides.swatch_size {
        config.swatch.size = swatch_size;
    }
}
