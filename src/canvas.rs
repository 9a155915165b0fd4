//! Opaque RGBA canvas and the clipped drawing primitives the sheets are built from.

#![forbid(unsafe_code)]

use image::{Rgba, RgbaImage};

use crate::{color::Rgb, error::RenderError};

/// Background of every sheet.
pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
/// Fill used for sheet headers.
pub const HEADER_FILL: Rgb = Rgb::new(255, 255, 255);

/// Longest side of a sheet the generator will allocate.
pub const MAX_SIDE: u32 = 32_768;

/// Pixel dimensions of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Build a size from explicit dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject sizes that cannot be allocated or encoded.
    pub fn ensure_drawable(self) -> Result<Self, RenderError> {
        if self.width == 0 || self.height == 0 || self.width > MAX_SIDE || self.height > MAX_SIDE {
            return Err(RenderError::CanvasSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

#[inline]
pub(crate) fn opaque(color: Rgb) -> Rgba<u8> {
    Rgba([color.red, color.green, color.blue, u8::MAX])
}

/// Allocate a canvas of `size` filled with opaque [`BACKGROUND`].
pub fn new_canvas(size: CanvasSize) -> RgbaImage {
    RgbaImage::from_pixel(size.width, size.height, opaque(BACKGROUND))
}

/// Fill the `width`×`height` rectangle at `(x, y)`, clipping at the canvas edge.
pub fn fill_rect(canvas: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
    let x_end = x.saturating_add(width).min(canvas.width());
    let y_end = y.saturating_add(height).min(canvas.height());
    let pixel = opaque(color);
    for py in y..y_end {
        for px in x..x_end {
            canvas.put_pixel(px, py, pixel);
        }
    }
}

/// Blend `color` over the pixel at `(x, y)` with the given coverage in `[0, 1]`.
///
/// Coordinates outside the canvas are ignored.
pub fn blend_pixel(canvas: &mut RgbaImage, x: i64, y: i64, color: Rgb, coverage: f32) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage >= 1.0 {
        canvas.put_pixel(x, y, opaque(color));
        return;
    }
    let target = canvas.get_pixel_mut(x, y);
    let source = [color.red, color.green, color.blue];
    for (channel, src) in target.0.iter_mut().zip(source) {
        let mixed = f32::from(src).mul_add(coverage, f32::from(*channel) * (1.0 - coverage));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            *channel = mixed.round().clamp(0.0, 255.0) as u8;
        }
    }
    target.0[3] = u8::MAX;
}
