//! Swatch image output.
//!
//! Renders each palette color as a solid square tile and saves the tiles
//! as numbered PNGs, in palette order. Downstream texture tooling picks
//! the files up by index.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;

use crate::color::Color;

/// Default edge length for swatch tiles, in pixels.
pub const DEFAULT_SWATCH_SIZE: u32 = 32;

/// Error type for swatch output failures.
#[derive(Debug, Error)]
pub enum SwatchError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Image encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Render a single solid-color tile.
pub fn swatch_image(color: Color, size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, color.to_rgba())
}

/// Save one tile per color as `{index}.png` under `dir`, creating the
/// directory if needed. Returns the written paths in palette order.
pub fn write_swatches(
    colors: &[Color],
    dir: &Path,
    size: u32,
) -> Result<Vec<PathBuf>, SwatchError> {
    std::fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(colors.len());
    for (i, color) in colors.iter().enumerate() {
        let path = dir.join(format!("{}.png", i));
        swatch_image(*color, size).save(&path)?;
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_swatch_image_is_solid() {
        let img = swatch_image(Color::new(10, 20, 30, 200), 4);
        assert_eq!(img.dimensions(), (4, 4));
        for pixel in img.pixels() {
            assert_eq!(*pixel, Rgba([10, 20, 30, 200]));
        }
    }

    #[test]
    fn test_write_swatches_numbered_in_order() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("swatches");
        let colors = vec![
            Color::new(255, 0, 0, 255),
            Color::new(0, 255, 0, 255),
            Color::new(0, 0, 255, 255),
        ];

        let paths = write_swatches(&colors, &out, 2).unwrap();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], out.join("0.png"));
        assert_eq!(paths[2], out.join("2.png"));

        // Read back and confirm order matches palette order
        let first = image::open(&paths[0]).unwrap().to_rgba8();
        assert_eq!(*first.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        let last = image::open(&paths[2]).unwrap().to_rgba8();
        assert_eq!(*last.get_pixel(1, 1), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_write_swatches_empty_palette() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("empty");
        let paths = write_swatches(&[], &out, 8).unwrap();
        assert!(paths.is_empty());
        assert!(out.exists());
    }
}
