//! Text capability injected into layout and rendering.
//!
//! Layout only needs [`TextMetrics`]; the renderer needs a full [`Typeface`].
//! Both implementations report one constant line height for every string,
//! including the empty one.

mod bitmap;
mod truetype;

pub use bitmap::BitmapFont;
pub use truetype::TrueTypeFont;

use image::RgbaImage;

use crate::color::Rgb;

/// Rendered pixel extent of a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextSize {
    /// Advance width in pixels.
    pub width: u32,
    /// Line height in pixels.
    pub height: u32,
}

/// Measures strings under a fixed font.
pub trait TextMetrics {
    /// Pixel width and line height of `text`.
    fn measure(&self, text: &str) -> TextSize;
}

/// A font that can also draw onto a sheet.
pub trait Typeface: TextMetrics {
    /// Draw `text` with its top-left corner at `(x, y)`, clipping at the canvas edge.
    fn draw(&self, canvas: &mut RgbaImage, x: u32, y: u32, text: &str, color: Rgb);
}
