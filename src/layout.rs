//! Canvas-size calculation for the compact and extended sheets.

#![forbid(unsafe_code)]

use crate::{
    canvas::CanvasSize,
    document::PaletteDocument,
    text::{TextMetrics, TextSize},
};

/// Horizontal gap between two luminosity cells, on top of the cell width.
pub const CELL_GAP: u32 = 2;

/// Shape of the luminosity stacks drawn in front of each extended row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackGeometry {
    /// Number of stacks.
    pub stacks: u32,
    /// Cells drawn per stack.
    pub cells_per_stack: u32,
}

impl Default for StackGeometry {
    fn default() -> Self {
        Self {
            stacks: 3,
            cells_per_stack: 6,
        }
    }
}

/// Which sheet is being laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetMode {
    /// Swatch and name per row.
    Compact,
    /// Luminosity stacks, swatch and name per row.
    Extended(StackGeometry),
}

impl SheetMode {
    /// Extended mode with the default 3×6 stacks.
    pub fn extended() -> Self {
        Self::Extended(StackGeometry::default())
    }
}

/// Header line drawn at the top of a sheet.
pub fn header_text(doc: &PaletteDocument, mode: SheetMode) -> String {
    match mode {
        SheetMode::Compact => format!("{} {}", doc.name, doc.version),
        SheetMode::Extended(_) => format!("{} {} (extended)", doc.name, doc.version),
    }
}

/// Size of the widest entry name by rendered width; ties keep the first entry.
///
/// An empty palette measures the empty string, which still has a line height.
pub fn longest_name<M: TextMetrics + ?Sized>(doc: &PaletteDocument, metrics: &M) -> TextSize {
    doc.colors
        .iter()
        .map(|entry| metrics.measure(&entry.name))
        .fold(None, |widest: Option<TextSize>, size| match widest {
            Some(current) if current.width >= size.width => Some(current),
            _ => Some(size),
        })
        .unwrap_or_else(|| metrics.measure(""))
}

/// Width of one data row whose name is `name_width` pixels wide.
///
/// Saturates at `u32::MAX` instead of overflowing.
pub fn row_width(name_width: u32, rect_size: u32, padding: u32, mode: SheetMode) -> u32 {
    let swatch_and_name = rect_size
        .saturating_add(padding)
        .saturating_add(name_width)
        .saturating_add(padding);
    match mode {
        SheetMode::Compact => padding.saturating_add(swatch_and_name),
        SheetMode::Extended(geometry) => {
            let cells = geometry
                .stacks
                .saturating_mul(geometry.cells_per_stack)
                .saturating_mul(padding.saturating_add(CELL_GAP));
            let stack_gaps = geometry.stacks.saturating_mul(padding);
            padding
                .saturating_add(cells)
                .saturating_add(stack_gaps)
                .saturating_add(swatch_and_name)
        }
    }
}

/// Compute the canvas needed to draw `doc` without clipping.
///
/// Width fits both the header line and the widest row; height stacks one
/// `rect_size + padding` row per entry below the header. Dimensions saturate
/// rather than overflow; [`CanvasSize::ensure_drawable`] rejects the result.
pub fn compute_canvas_size<M: TextMetrics + ?Sized>(
    doc: &PaletteDocument,
    metrics: &M,
    rect_size: u32,
    padding: u32,
    mode: SheetMode,
) -> CanvasSize {
    let name = longest_name(doc, metrics);
    let header = metrics.measure(&header_text(doc, mode));

    let header_width = padding.saturating_add(header.width).saturating_add(padding);
    let width = header_width.max(row_width(name.width, rect_size, padding, mode));

    let rows = u32::try_from(doc.colors.len()).unwrap_or(u32::MAX);
    let height = padding
        .saturating_add(name.height)
        .saturating_add(padding.saturating_add(rect_size).saturating_mul(rows))
        .saturating_add(padding);

    CanvasSize::new(width, height)
}
