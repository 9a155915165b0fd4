//! Render configuration loading: drawing constants, font and file locations.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use crate::render::LuminosityRamp;

/// Default location on disk where the generator looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/sheets.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "PALETTE_SHEETS_CONFIG_PATH";
/// Palette document read when nothing else is configured.
const DEFAULT_INPUT: &str = "src/palette.json";
/// Directory receiving both sheets when nothing else is configured.
const DEFAULT_OUTPUT_DIR: &str = "dist";
/// Pixel size used for a configured TrueType font.
const DEFAULT_FONT_SIZE: f32 = 11.0;

#[derive(Debug, Clone, PartialEq)]
/// Immutable configuration for one generation run.
pub struct RenderConfig {
    /// Gap around every element; also the width of a luminosity cell.
    pub padding: u32,
    /// Side of a color swatch; also the height of a luminosity cell.
    pub rect_size: u32,
    /// Luminosity stacks of the extended sheet.
    pub ramp: LuminosityRamp,
    /// TrueType font to use instead of the built-in bitmap font.
    pub font_path: Option<PathBuf>,
    /// Pixel size of the TrueType font.
    pub font_size: f32,
    /// Palette document to render.
    pub input: PathBuf,
    /// Directory receiving both sheets.
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: 5,
            rect_size: 10,
            ramp: LuminosityRamp::default(),
            font_path: None,
            font_size: DEFAULT_FONT_SIZE,
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl RenderConfig {
    /// Load the configuration from the default or env-overridden path.
    pub fn load() -> Self {
        Self::load_from(&resolve_config_path())
    }

    /// Load the configuration at `path`, falling back to built-in defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!(
                        path = %path.display(),
                        padding = config.padding,
                        rect_size = config.rect_size,
                        "loaded render config"
                    );
                    config
                }
                Err(reason) => {
                    warn!(
                        path = %path.display(),
                        error = %reason,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse and validate JSON configuration text. Absent fields keep their defaults.
    pub fn parse(contents: &str) -> Result<Self, String> {
        let raw: RawConfig = serde_json::from_str(contents).map_err(|err| err.to_string())?;
        raw.validate()
            .map_err(|err| format!("validation failed: {err}"))?;
        Ok(raw.into())
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[validate(range(min = 1, max = 1024))]
    padding: Option<u32>,
    #[validate(range(min = 1, max = 1024))]
    rect_size: Option<u32>,
    #[validate(range(max = 1024))]
    lum_step: Option<u32>,
    #[validate(length(min = 1, max = 16))]
    lum_bases: Option<Vec<u32>>,
    #[validate(range(min = 1, max = 64))]
    steps_per_stack: Option<u32>,
    font_path: Option<PathBuf>,
    #[validate(range(exclusive_min = 0.0))]
    font_size: Option<f32>,
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl From<RawConfig> for RenderConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            padding: value.padding.unwrap_or(defaults.padding),
            rect_size: value.rect_size.unwrap_or(defaults.rect_size),
            ramp: LuminosityRamp {
                lum_step: value.lum_step.unwrap_or(defaults.ramp.lum_step),
                bases: value.lum_bases.unwrap_or(defaults.ramp.bases),
                steps_per_stack: value
                    .steps_per_stack
                    .unwrap_or(defaults.ramp.steps_per_stack),
            },
            font_path: value.font_path.or(defaults.font_path),
            font_size: value.font_size.unwrap_or(defaults.font_size),
            input: value.input.unwrap_or(defaults.input),
            output_dir: value.output_dir.unwrap_or(defaults.output_dir),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
