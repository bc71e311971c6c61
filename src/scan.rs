//! Pixel scan planning.
//!
//! A scan plan is the ordered list of coordinates the aggregator will
//! sample. Full mode rasters the whole image; row mode samples a single
//! one-pixel strip so a palette swatch image can be read in order.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Which pixels of the image are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Every coordinate in raster order (y outer, x inner).
    #[default]
    Full,
    /// A single strip along the image's long axis. For square images the
    /// axis must be chosen explicitly via [`Orientation`].
    Row,
}

/// Strip axis for row scans of square images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Scan the row y=0, x ascending.
    X,
    /// Scan the column x=0, y ascending.
    Y,
}

/// Build the ordered coordinate sequence for a scan.
///
/// - `Full`: `width * height` coordinates in raster order.
/// - `Row` on a non-square image: the single strip along the longer axis,
///   ascending. The `orientation` argument is not consulted.
/// - `Row` on a square image: `orientation` is required; leaving it unset
///   is a configuration error, not a silent default.
pub fn scan_plan(
    width: u32,
    height: u32,
    mode: ScanMode,
    orientation: Option<Orientation>,
) -> Result<Vec<(u32, u32)>, ExtractError> {
    match mode {
        ScanMode::Full => {
            let mut coords = Vec::with_capacity(width as usize * height as usize);
            for y in 0..height {
                for x in 0..width {
                    coords.push((x, y));
                }
            }
            Ok(coords)
        }
        ScanMode::Row => {
            if height > width {
                Ok((0..height).map(|y| (0, y)).collect())
            } else if width > height {
                Ok((0..width).map(|x| (x, 0)).collect())
            } else {
                match orientation {
                    Some(Orientation::X) => Ok((0..width).map(|x| (x, 0)).collect()),
                    Some(Orientation::Y) => Ok((0..height).map(|y| (0, y)).collect()),
                    None => Err(ExtractError::AmbiguousOrientation),
                }
            }
        }
    }
}
