//! TrueType/OpenType text through `ab_glyph`.

#![forbid(unsafe_code)]

use std::{fs, path::Path};

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use image::RgbaImage;

use super::{TextMetrics, TextSize, Typeface};
use crate::{canvas::blend_pixel, color::Rgb, error::RenderError};

/// TrueType/OpenType font rendered at a fixed pixel size.
///
/// Glyph edges are anti-aliased, so text adds intermediate shades to a sheet.
pub struct TrueTypeFont {
    font: FontVec,
    scale: PxScale,
}

impl std::fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrueTypeFont")
            .field("scale", &self.scale.y)
            .finish_non_exhaustive()
    }
}

impl TrueTypeFont {
    /// Load a font file from disk.
    pub fn from_path(path: &Path, size_px: f32) -> Result<Self, RenderError> {
        let bytes = fs::read(path).map_err(|source| RenderError::ReadFont {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes, size_px).ok_or_else(|| RenderError::InvalidFont {
            path: path.to_path_buf(),
        })
    }

    /// Parse in-memory font data, returning `None` when the bytes are not a font.
    pub fn from_bytes(bytes: Vec<u8>, size_px: f32) -> Option<Self> {
        let font = FontVec::try_from_vec(bytes).ok()?;
        Some(Self {
            font,
            scale: PxScale::from(size_px),
        })
    }

    fn line_height(&self) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let height = (scaled.ascent() - scaled.descent()).ceil().max(0.0) as u32;
        height
    }
}

impl TextMetrics for TrueTypeFont {
    fn measure(&self, text: &str) -> TextSize {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0_f32;
        let mut previous: Option<GlyphId> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let width = width.ceil().max(0.0) as u32;
        TextSize {
            width,
            height: self.line_height(),
        }
    }
}

impl Typeface for TrueTypeFont {
    fn draw(&self, canvas: &mut RgbaImage, x: u32, y: u32, text: &str, color: Rgb) {
        let scaled = self.font.as_scaled(self.scale);
        #[allow(clippy::cast_precision_loss)]
        let mut caret = point(x as f32, y as f32 + scaled.ascent());
        let mut previous: Option<GlyphId> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret.x += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, caret);
            caret.x += scaled.h_advance(id);
            previous = Some(id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            #[allow(clippy::cast_possible_truncation)]
            let (left, top) = (bounds.min.x.floor() as i64, bounds.min.y.floor() as i64);
            outlined.draw(|gx, gy, coverage| {
                blend_pixel(
                    canvas,
                    left + i64::from(gx),
                    top + i64::from(gy),
                    color,
                    coverage,
                );
            });
        }
    }
}
