//! Built-in 8×8 bitmap font backed by `font8x8`.

#![forbid(unsafe_code)]

use font8x8::{
    BASIC_FONTS, BLOCK_FONTS, BOX_FONTS, GREEK_FONTS, LATIN_FONTS, MISC_FONTS, UnicodeFonts,
};
use image::RgbaImage;

use super::{TextMetrics, TextSize, Typeface};
use crate::{canvas::blend_pixel, color::Rgb};

const GLYPH_SIZE: u32 = 8;
const REPLACEMENT: char = '?';

/// Built-in 8×8 bitmap font.
///
/// Glyph pixels are either fully set or untouched, so text never introduces
/// colors other than its fill.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl BitmapFont {
    fn glyph(c: char) -> [u8; 8] {
        BASIC_FONTS
            .get(c)
            .or_else(|| LATIN_FONTS.get(c))
            .or_else(|| GREEK_FONTS.get(c))
            .or_else(|| BOX_FONTS.get(c))
            .or_else(|| BLOCK_FONTS.get(c))
            .or_else(|| MISC_FONTS.get(c))
            .or_else(|| BASIC_FONTS.get(REPLACEMENT))
            .unwrap_or([0; 8])
    }
}

impl TextMetrics for BitmapFont {
    fn measure(&self, text: &str) -> TextSize {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        TextSize {
            width: chars.saturating_mul(GLYPH_SIZE),
            height: GLYPH_SIZE,
        }
    }
}

impl Typeface for BitmapFont {
    fn draw(&self, canvas: &mut RgbaImage, x: u32, y: u32, text: &str, color: Rgb) {
        let mut origin_x = i64::from(x);
        let origin_y = i64::from(y);
        for c in text.chars() {
            // Row-major, bit 0 is the leftmost pixel.
            for (row, bits) in (0_i64..).zip(Self::glyph(c)) {
                for col in 0..GLYPH_SIZE {
                    if bits & (1 << col) != 0 {
                        blend_pixel(canvas, origin_x + i64::from(col), origin_y + row, color, 1.0);
                    }
                }
            }
            origin_x += i64::from(GLYPH_SIZE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasSize, new_canvas};
    use image::Rgba;

    #[test]
    fn measures_fixed_cells() {
        let font = BitmapFont;
        assert_eq!(font.measure("abc"), TextSize { width: 24, height: 8 });
        assert_eq!(font.measure(""), TextSize { width: 0, height: 8 });
        assert_eq!(font.measure("é"), TextSize { width: 8, height: 8 });
    }

    #[test]
    fn draws_only_the_fill_color() {
        let mut canvas = new_canvas(CanvasSize::new(16, 8));
        BitmapFont.draw(&mut canvas, 0, 0, "A", Rgb::new(255, 0, 0));
        let red = canvas
            .pixels()
            .filter(|p| **p == Rgba([255, 0, 0, 255]))
            .count();
        let black = canvas
            .pixels()
            .filter(|p| **p == Rgba([0, 0, 0, 255]))
            .count();
        assert!(red > 0);
        assert_eq!(red + black, 16 * 8);
        // Second cell stays empty.
        assert!((8..16).all(|x| (0..8).all(|y| *canvas.get_pixel(x, y) == Rgba([0, 0, 0, 255]))));
    }

    #[test]
    fn unknown_glyphs_draw_as_replacement() {
        let mut unknown = new_canvas(CanvasSize::new(8, 8));
        let mut replacement = new_canvas(CanvasSize::new(8, 8));
        BitmapFont.draw(&mut unknown, 0, 0, "\u{E000}", Rgb::new(0, 255, 0));
        BitmapFont.draw(&mut replacement, 0, 0, "?", Rgb::new(0, 255, 0));
        assert_eq!(unknown, replacement);
    }

    #[test]
    fn drawing_past_the_edge_is_clipped() {
        let mut canvas = new_canvas(CanvasSize::new(4, 4));
        BitmapFont.draw(&mut canvas, 2, 2, "WWW", Rgb::new(255, 255, 255));
        assert_eq!(canvas.dimensions(), (4, 4));
    }
}
