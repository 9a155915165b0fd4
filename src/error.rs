//! Error types shared by the palette loading, rendering and output stages.

use std::path::PathBuf;

use thiserror::Error;
use validator::ValidationErrors;

/// Convenient result alias returning [`SheetError`] failures.
pub type SheetResult<T> = Result<T, SheetError>;

/// Top-level failure of a sheet generation run.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The palette document is missing, malformed or references bad colors.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Reading the input or writing one of the sheets failed.
    #[error(transparent)]
    Io(#[from] IoError),
    /// Measuring text, drawing or encoding failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Problems with the palette document itself.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document is not valid JSON or lacks a required field.
    #[error("malformed palette document `{path}`")]
    Malformed {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: serde_json::Error,
    },
    /// The document parsed but failed field validation.
    #[error("invalid palette document: {0}")]
    Invalid(String),
    /// A color string could not be resolved to an RGB triad.
    #[error("entry #{index} `{name}`: unresolvable color `{value}`")]
    UnresolvableColor {
        /// Zero-based position in the document.
        index: usize,
        /// Entry name.
        name: String,
        /// Color string as written.
        value: String,
    },
}

impl From<ValidationErrors> for InputError {
    fn from(err: ValidationErrors) -> Self {
        InputError::Invalid(format!("validation failed: {}", err))
    }
}

impl From<ValidationErrors> for SheetError {
    fn from(err: ValidationErrors) -> Self {
        SheetError::Input(err.into())
    }
}

/// Filesystem failures, always tagged with the path involved.
#[derive(Debug, Error)]
pub enum IoError {
    /// The palette document could not be read.
    #[error("failed to read palette document `{path}`")]
    ReadInput {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The output directory could not be created.
    #[error("failed to create output directory `{path}`")]
    CreateOutputDir {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// An image file could not be created or written.
    #[error("failed to write image `{path}`")]
    WriteImage {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
}

/// Failures raised while preparing fonts, drawing or encoding.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The configured TrueType font could not be read.
    #[error("failed to read font `{path}`")]
    ReadFont {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The font bytes are not a usable TrueType/OpenType font.
    #[error("invalid font `{path}`")]
    InvalidFont {
        /// Font file.
        path: PathBuf,
    },
    /// Layout produced a canvas the encoder cannot represent.
    #[error("invalid canvas size {width}x{height}")]
    CanvasSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// The indexed PNG encoder rejected the image.
    #[error("failed to encode indexed PNG `{path}`")]
    EncodeIndexed {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: png::EncodingError,
    },
    /// The RGBA PNG encoder rejected the image.
    #[error("failed to encode PNG `{path}`")]
    EncodeRgba {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: image::ImageError,
    },
}
