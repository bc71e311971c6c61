//! In-memory pixel sources.
//!
//! The engine never decodes images itself; callers hand it anything that
//! can answer per-pixel color lookups. Sources without an alpha channel
//! report pixels as fully opaque.

use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::color::Color;

/// A decoded image the engine can sample.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// The 4-channel color at (x, y). Must be valid for all coordinates
    /// inside `width x height`.
    fn pixel(&self, x: u32, y: u32) -> Color;
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        RgbaImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbaImage::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from_rgba(*self.get_pixel(x, y))
    }
}

impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        // get_pixel converts to RGBA, filling alpha with 255 for
        // alpha-less formats
        Color::from_rgba(self.get_pixel(x, y))
    }
}
