//! Drawing of the compact and extended palette sheets.
//!
//! Both passes are pure functions of the document: each one allocates and
//! owns its canvas.

#![forbid(unsafe_code)]

pub mod quantize;

use image::RgbaImage;

use crate::{
    canvas::{CanvasSize, HEADER_FILL, fill_rect, new_canvas},
    color::adjust_lum,
    document::{ColorEntry, PaletteDocument},
    layout::{CELL_GAP, SheetMode, StackGeometry, header_text},
    text::{TextMetrics, Typeface},
};

/// Luminosity variants drawn in front of each extended row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminosityRamp {
    /// Luminosity added per step inside a stack.
    pub lum_step: u32,
    /// Starting luminosity of each stack (dark, mid-blend, bright by default).
    pub bases: Vec<u32>,
    /// Steps drawn per stack, starting at 1.
    pub steps_per_stack: u32,
}

impl Default for LuminosityRamp {
    fn default() -> Self {
        Self {
            lum_step: 20,
            bases: vec![30, 90, 150],
            steps_per_stack: 6,
        }
    }
}

impl LuminosityRamp {
    /// Stack layout matching this ramp.
    pub fn geometry(&self) -> StackGeometry {
        StackGeometry {
            stacks: u32::try_from(self.bases.len()).unwrap_or(u32::MAX),
            cells_per_stack: self.steps_per_stack,
        }
    }

    /// Extended sheet mode matching this ramp.
    pub fn mode(&self) -> SheetMode {
        SheetMode::Extended(self.geometry())
    }

    /// Luminosities of one stack: `base + lum_step * step` for `step` in `1..=steps_per_stack`.
    pub fn stack(&self, base: u32) -> impl Iterator<Item = f64> + '_ {
        (1..=self.steps_per_stack)
            .map(move |step| f64::from(base) + f64::from(self.lum_step) * f64::from(step))
    }
}

/// Allocate the canvas and draw the header; returns the y of the first row.
fn start_sheet(
    doc: &PaletteDocument,
    typeface: &dyn Typeface,
    size: CanvasSize,
    padding: u32,
    mode: SheetMode,
) -> (RgbaImage, u32) {
    let mut canvas = new_canvas(size);
    let header = header_text(doc, mode);
    let header_height = typeface.measure(&header).height;
    typeface.draw(&mut canvas, padding, padding, &header, HEADER_FILL);
    (canvas, padding + header_height + padding)
}

/// Reference swatch at `(x, y)` followed by the entry name in its own color.
fn draw_swatch(
    canvas: &mut RgbaImage,
    typeface: &dyn Typeface,
    entry: &ColorEntry,
    x: u32,
    y: u32,
    rect_size: u32,
    padding: u32,
) {
    fill_rect(canvas, x, y, rect_size, rect_size, entry.color);
    typeface.draw(canvas, x + rect_size + padding, y, &entry.name, entry.color);
}

/// Draw the compact sheet: one swatch and name per row.
pub fn render_compact(
    doc: &PaletteDocument,
    typeface: &dyn Typeface,
    size: CanvasSize,
    rect_size: u32,
    padding: u32,
) -> RgbaImage {
    let (mut canvas, mut y) = start_sheet(doc, typeface, size, padding, SheetMode::Compact);
    for entry in &doc.colors {
        draw_swatch(&mut canvas, typeface, entry, padding, y, rect_size, padding);
        y += rect_size + padding;
    }
    canvas
}

/// Draw the extended sheet: luminosity stacks, then swatch and name per row.
pub fn render_extended(
    doc: &PaletteDocument,
    typeface: &dyn Typeface,
    size: CanvasSize,
    rect_size: u32,
    padding: u32,
    ramp: &LuminosityRamp,
) -> RgbaImage {
    let (mut canvas, mut y) = start_sheet(doc, typeface, size, padding, ramp.mode());
    for entry in &doc.colors {
        let mut x = padding;
        for &base in &ramp.bases {
            for lum in ramp.stack(base) {
                fill_rect(&mut canvas, x, y, padding, rect_size, adjust_lum(entry.color, lum));
                x += padding + CELL_GAP;
            }
            x += padding;
        }
        draw_swatch(&mut canvas, typeface, entry, x, y, rect_size, padding);
        y += rect_size + padding;
    }
    canvas
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use image::Rgba;

    use super::*;
    use crate::{
        color::Rgb,
        layout::compute_canvas_size,
        text::BitmapFont,
    };

    const PADDING: u32 = 5;
    const RECT: u32 = 10;

    fn pixel(color: Rgb) -> Rgba<u8> {
        Rgba([color.red, color.green, color.blue, 255])
    }

    fn sample_doc() -> PaletteDocument {
        PaletteDocument::new(
            "Test",
            "1.0",
            vec![
                ColorEntry::new("Red", Rgb::new(255, 0, 0)),
                ColorEntry::new("Teal", Rgb::new(0, 128, 128)),
            ],
        )
    }

    #[test]
    fn ramp_defaults_produce_eighteen_luminosities() {
        let ramp = LuminosityRamp::default();
        let lums: Vec<f64> = ramp.bases.iter().flat_map(|&b| ramp.stack(b)).collect();
        assert_eq!(lums.len(), 18);
        assert_eq!(lums[0], 50.0);
        assert_eq!(lums[5], 150.0);
        assert_eq!(lums[6], 110.0);
        assert_eq!(lums[17], 270.0);
        assert_eq!(ramp.geometry(), StackGeometry::default());
    }

    #[test]
    fn compact_draws_header_and_rows() {
        let doc = sample_doc();
        let size = compute_canvas_size(&doc, &BitmapFont, RECT, PADDING, SheetMode::Compact);
        let sheet = render_compact(&doc, &BitmapFont, size, RECT, PADDING);
        assert_eq!(sheet.dimensions(), (size.width, size.height));

        let first_row = PADDING + BitmapFont.measure("").height + PADDING;
        for (row, entry) in (0..).zip(&doc.colors) {
            let y = first_row + row * (RECT + PADDING);
            assert_eq!(*sheet.get_pixel(PADDING, y), pixel(entry.color));
            assert_eq!(*sheet.get_pixel(PADDING + RECT - 1, y + RECT - 1), pixel(entry.color));
            assert_eq!(*sheet.get_pixel(PADDING + RECT, y), pixel(Rgb::new(0, 0, 0)));
            // Name is drawn in the entry's own color right of the swatch.
            let name_pixels = (PADDING + RECT + PADDING..size.width)
                .flat_map(|x| (y..y + 8).map(move |yy| (x, yy)))
                .filter(|&(x, yy)| *sheet.get_pixel(x, yy) == pixel(entry.color))
                .count();
            assert!(name_pixels > 0);
        }

        let header_white = (0..size.width)
            .flat_map(|x| (PADDING..PADDING + 8).map(move |y| (x, y)))
            .filter(|&(x, y)| *sheet.get_pixel(x, y) == pixel(HEADER_FILL))
            .count();
        assert!(header_white > 0);
    }

    #[test]
    fn compact_uses_background_entry_and_header_colors_only() {
        let doc = PaletteDocument::new("Test", "1.0", vec![ColorEntry::new("Red", Rgb::new(255, 0, 0))]);
        let size = compute_canvas_size(&doc, &BitmapFont, RECT, PADDING, SheetMode::Compact);
        let sheet = render_compact(&doc, &BitmapFont, size, RECT, PADDING);
        let colors: HashSet<_> = sheet.pixels().copied().collect();
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn extended_draws_eighteen_cells_and_reference() {
        let doc = sample_doc();
        let ramp = LuminosityRamp::default();
        let size = compute_canvas_size(&doc, &BitmapFont, RECT, PADDING, ramp.mode());
        let sheet = render_extended(&doc, &BitmapFont, size, RECT, PADDING, &ramp);
        assert_eq!(sheet.dimensions(), (size.width, size.height));

        let first_row = PADDING + 8 + PADDING;
        for (row, entry) in (0..).zip(&doc.colors) {
            let y = first_row + row * (RECT + PADDING);
            let mut x = PADDING;
            let mut regions = 0;
            for &base in &ramp.bases {
                for lum in ramp.stack(base) {
                    let expected = pixel(adjust_lum(entry.color, lum));
                    assert_eq!(*sheet.get_pixel(x, y), expected);
                    assert_eq!(*sheet.get_pixel(x + PADDING - 1, y + RECT - 1), expected);
                    // Two-pixel gap after every cell.
                    assert_eq!(*sheet.get_pixel(x + PADDING, y), pixel(Rgb::new(0, 0, 0)));
                    regions += 1;
                    x += PADDING + CELL_GAP;
                }
                x += PADDING;
            }
            assert_eq!(x, PADDING + 18 * (PADDING + CELL_GAP) + 3 * PADDING);
            assert_eq!(*sheet.get_pixel(x, y), pixel(entry.color));
            assert_eq!(*sheet.get_pixel(x + RECT - 1, y + RECT - 1), pixel(entry.color));
            regions += 1;
            assert_eq!(regions, 19);
        }
    }

    #[test]
    fn empty_palette_renders_header_only() {
        let doc = PaletteDocument::new("Empty", "0", Vec::new());
        let size = compute_canvas_size(&doc, &BitmapFont, RECT, PADDING, SheetMode::Compact);
        let sheet = render_compact(&doc, &BitmapFont, size, RECT, PADDING);
        assert_eq!(sheet.height(), 2 * PADDING + 8);
        let colors: HashSet<_> = sheet.pixels().copied().collect();
        assert_eq!(colors.len(), 2);
    }
}
