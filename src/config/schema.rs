//! Configuration schema types for `palex.toml`
//!
//! Defines the structure and validation rules for palette extraction
//! configuration.

use serde::{Deserialize, Serialize};

use crate::color::parse_color;
use crate::engine::{ColorBudget, ExtractOptions};
use crate::ignore::IgnoreList;
use crate::scan::{Orientation, ScanMode};
use crate::swatch::DEFAULT_SWATCH_SIZE;

/// Top-level `palex.toml` structure. Every section is optional; missing
/// sections fall back to permissive defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PalexConfig {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub ignore: IgnoreConfig,
    #[serde(default)]
    pub swatch: SwatchConfig,
}

/// `[extract]` section: engine tuning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractConfig {
    /// Palette size budget; omit for no reduction.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_colors: Option<usize>,
    /// Minimum share of considered pixels a color needs, 0-100.
    #[serde(default)]
    pub min_percentage: f64,
    #[serde(default)]
    pub scan_mode: ScanMode,
    /// Strip axis for row scans of square images.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub orientation: Option<Orientation>,
}

/// `[ignore]` section: colors excluded from counting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IgnoreConfig {
    /// Hex color strings (`#RGB[A]` or `#RRGGBB[AA]`).
    #[serde(default)]
    pub colors: Vec<String>,
    /// Distance threshold; 0 ignores exact matches only.
    #[serde(default)]
    pub threshold: f64,
}

/// `[swatch]` section: tile output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwatchConfig {
    /// Edge length of each swatch tile in pixels.
    #[serde(default = "default_swatch_size")]
    pub size: u32,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self { size: DEFAULT_SWATCH_SIZE }
    }
}

fn default_swatch_size() -> u32 {
    DEFAULT_SWATCH_SIZE
}

impl PalexConfig {
    /// Check the configuration for invalid values.
    ///
    /// Returns a list of human-readable problems; empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let pct = self.extract.min_percentage;
        if !pct.is_finite() || pct < 0.0 || pct > 100.0 {
            errors.push(format!("extract.min_percentage must be in 0-100, got {}", pct));
        }

        let threshold = self.ignore.threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            errors.push(format!(
                "ignore.threshold must be a non-negative number, got {}",
                threshold
            ));
        }

        for color in &self.ignore.colors {
            if let Err(e) = parse_color(color) {
                errors.push(format!("ignore.colors entry '{}': {}", color, e));
            }
        }

        if self.swatch.size == 0 {
            errors.push("swatch.size must be at least 1".to_string());
        }

        errors
    }

    /// The ignore list described by the `[ignore]` section.
    ///
    /// Color strings are re-parsed here; a config that passed
    /// [`PalexConfig::validate`] cannot fail.
    pub fn ignore_list(&self) -> Result<IgnoreList, crate::color::ColorError> {
        let colors = self
            .ignore
            .colors
            .iter()
            .map(|s| parse_color(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(IgnoreList::new(colors, self.ignore.threshold))
    }

    /// The color budget described by the `[extract]` section.
    pub fn budget(&self) -> ColorBudget {
        match self.extract.max_colors {
            Some(n) => ColorBudget::Limit(n),
            None => ColorBudget::Unlimited,
        }
    }

    /// Build engine options from this configuration.
    pub fn extract_options(&self) -> Result<ExtractOptions, crate::color::ColorError> {
        Ok(ExtractOptions {
            ignore: self.ignore_list()?,
            max_colors: self.budget(),
            min_percentage: self.extract.min_percentage,
            scan_mode: self.extract.scan_mode,
            orientation: self.extract.orientation,
        })
    }
}
