//! Library crate for palette-sheets: renders a palette document into a compact
//! swatch sheet and an extended luminosity sheet.

pub mod canvas;
pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod layout;
pub mod output;
pub mod render;
pub mod text;
