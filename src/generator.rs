//! One generation run: load the palette, draw both sheets, write them out.

use std::{fs, path::PathBuf};

use tracing::info;

use crate::{
    config::RenderConfig,
    document::PaletteDocument,
    error::{IoError, SheetResult},
    layout::{SheetMode, compute_canvas_size},
    output::{write_indexed_png, write_rgba_png},
    render::{quantize::quantize, render_compact, render_extended},
    text::{BitmapFont, TrueTypeFont, Typeface},
};

/// Colors the compact sheet adds on top of its entries: background and header.
const CHROME_COLORS: usize = 2;

/// Paths of the files written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSheets {
    /// `<name>.png`, indexed.
    pub compact: PathBuf,
    /// `<name>_ext.png`, RGBA.
    pub extended: PathBuf,
}

/// Font selected by the configuration: TrueType when a path is set, bitmap otherwise.
pub fn build_typeface(config: &RenderConfig) -> SheetResult<Box<dyn Typeface>> {
    match &config.font_path {
        Some(path) => {
            let font = TrueTypeFont::from_path(path, config.font_size)?;
            info!(path = %path.display(), size = config.font_size, "using TrueType font");
            Ok(Box::new(font))
        }
        None => Ok(Box::new(BitmapFont)),
    }
}

/// Load the configured palette document and generate both sheets.
pub fn generate(config: &RenderConfig) -> SheetResult<GeneratedSheets> {
    let typeface = build_typeface(config)?;
    let document = PaletteDocument::load(&config.input)?;
    generate_sheets(&document, typeface.as_ref(), config)
}

/// Draw and write both sheets for an already loaded document.
pub fn generate_sheets(
    document: &PaletteDocument,
    typeface: &dyn Typeface,
    config: &RenderConfig,
) -> SheetResult<GeneratedSheets> {
    let RenderConfig {
        padding,
        rect_size,
        ramp,
        output_dir,
        ..
    } = config;

    fs::create_dir_all(output_dir).map_err(|source| IoError::CreateOutputDir {
        path: output_dir.clone(),
        source,
    })?;

    let size = compute_canvas_size(document, typeface, *rect_size, *padding, SheetMode::Compact)
        .ensure_drawable()?;
    info!(
        name = %document.name,
        width = size.width,
        height = size.height,
        "drawing palette"
    );
    let sheet = render_compact(document, typeface, size, *rect_size, *padding);
    let indexed = quantize(&sheet, document.colors.len() + CHROME_COLORS);
    let compact = write_indexed_png(&output_dir.join(format!("{}.png", document.name)), &indexed)?;

    let size = compute_canvas_size(document, typeface, *rect_size, *padding, ramp.mode())
        .ensure_drawable()?;
    info!(
        name = %document.name,
        width = size.width,
        height = size.height,
        "drawing extended palette"
    );
    let sheet = render_extended(document, typeface, size, *rect_size, *padding, ramp);
    let extended = write_rgba_png(
        &output_dir.join(format!("{}_ext.png", document.name)),
        &sheet,
    )?;

    info!(
        compact = %compact.display(),
        extended = %extended.display(),
        "palette files generated"
    );
    Ok(GeneratedSheets { compact, extended })
}
