//! Palette document: the JSON input, validated and with every color resolved.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::{debug, info};
use validator::Validate;

use crate::{
    color::{Rgb, parse_color},
    error::{InputError, IoError, SheetResult},
};

pub mod validation;

use validation::validate_palette_name;

/// A palette ready for layout and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteDocument {
    /// Palette name; also the output file stem.
    pub name: String,
    /// Version string shown in the header.
    pub version: String,
    /// Rendering order is the document order.
    pub colors: Vec<ColorEntry>,
}

/// One named color of the palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    /// Label drawn next to the swatch.
    pub name: String,
    /// Resolved color.
    pub color: Rgb,
    /// Color string as written in the document.
    pub notation: String,
}

impl ColorEntry {
    /// Build an entry from an already resolved color.
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            notation: format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue),
            color,
        }
    }
}

impl PaletteDocument {
    /// Build a document from parts.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        colors: Vec<ColorEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            colors,
        }
    }

    /// Read, validate and resolve the palette document at `path`.
    pub fn load(path: &Path) -> SheetResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| IoError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_json(&contents, path)?;
        info!(
            path = %path.display(),
            name = %document.name,
            version = %document.version,
            count = document.colors.len(),
            "loaded palette document"
        );
        for entry in &document.colors {
            debug!(
                name = %entry.name,
                notation = %entry.notation,
                red = entry.color.red,
                green = entry.color.green,
                blue = entry.color.blue,
                "resolved color"
            );
        }
        Ok(document)
    }

    /// Parse a document from JSON text; `origin` is only used in diagnostics.
    pub fn from_json(contents: &str, origin: &Path) -> SheetResult<Self> {
        let raw: RawDocument =
            serde_json::from_str(contents).map_err(|source| InputError::Malformed {
                path: origin.to_path_buf(),
                source,
            })?;
        raw.validate()?;
        Ok(raw.try_into()?)
    }
}

#[derive(Debug, Deserialize, Validate)]
/// JSON representation of the palette file.
struct RawDocument {
    #[validate(custom(function = "validate_palette_name"))]
    name: String,
    version: String,
    palette: Vec<RawColorEntry>,
}

#[derive(Debug, Deserialize)]
/// JSON representation of a single `{ name, color }` entry.
struct RawColorEntry {
    name: String,
    color: String,
}

impl TryFrom<RawDocument> for PaletteDocument {
    type Error = InputError;

    fn try_from(value: RawDocument) -> Result<Self, Self::Error> {
        let colors = value
            .palette
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match parse_color(&entry.color) {
                Some(color) => Ok(ColorEntry {
                    name: entry.name,
                    color,
                    notation: entry.color,
                }),
                None => Err(InputError::UnresolvableColor {
                    index,
                    name: entry.name,
                    value: entry.color,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: value.name,
            version: value.version,
            colors,
        })
    }
}
