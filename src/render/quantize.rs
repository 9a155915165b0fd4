//! Reduction of a rendered sheet to an indexed palette.
//!
//! Sheets whose colors already fit the limit keep them exactly. Anything
//! denser (anti-aliased TrueType text, mostly) goes through NeuQuant.

#![forbid(unsafe_code)]

use std::collections::{BTreeSet, HashMap};

use color_quant::NeuQuant;
use image::RgbaImage;

use crate::color::Rgb;

/// Smallest palette an indexed sheet is reduced to.
pub const MIN_COLORS: usize = 2;
/// Largest palette an 8-bit indexed PNG can hold.
pub const MAX_COLORS: usize = 256;

/// NeuQuant sampling factor; 1 learns from every pixel.
const SAMPLE_FACTOR: i32 = 1;

/// Image stored as palette indices.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Palette entries, at most [`MAX_COLORS`].
    pub palette: Vec<Rgb>,
    /// One index per pixel, row-major.
    pub indices: Vec<u8>,
}

type Channels = [u8; 3];

fn channels(pixel: &image::Rgba<u8>) -> Channels {
    let [r, g, b, _] = pixel.0;
    [r, g, b]
}

fn distance(a: Channels, b: Rgb) -> u32 {
    let dr = i32::from(a[0]) - i32::from(b.red);
    let dg = i32::from(a[1]) - i32::from(b.green);
    let db = i32::from(a[2]) - i32::from(b.blue);
    (dr * dr + dg * dg + db * db).unsigned_abs()
}

/// Palette learned by NeuQuant, deduplicated and in ascending channel order.
fn learned_palette(image: &RgbaImage, max_colors: usize) -> Vec<Rgb> {
    let opaque: Vec<u8> = image
        .pixels()
        .flat_map(|pixel| {
            let [r, g, b] = channels(pixel);
            [r, g, b, u8::MAX]
        })
        .collect();
    let network = NeuQuant::new(SAMPLE_FACTOR, max_colors, &opaque);
    let learned: BTreeSet<Channels> = network
        .color_map_rgb()
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();
    learned.into_iter().map(|[r, g, b]| Rgb::new(r, g, b)).collect()
}

/// Reduce `image` to an indexed palette of at most `max_colors` colors.
///
/// `max_colors` is clamped to [`MIN_COLORS`]..=[`MAX_COLORS`]. Alpha is
/// ignored; sheets are opaque. When the image has no more distinct colors
/// than the limit, the palette is exactly those colors in ascending channel
/// order. Pixels map to their nearest palette entry, without dithering.
pub fn quantize(image: &RgbaImage, max_colors: usize) -> IndexedImage {
    let max_colors = max_colors.clamp(MIN_COLORS, MAX_COLORS);

    let distinct: BTreeSet<Channels> = image.pixels().map(channels).collect();
    let palette: Vec<Rgb> = if distinct.len() <= max_colors {
        distinct.into_iter().map(|[r, g, b]| Rgb::new(r, g, b)).collect()
    } else {
        learned_palette(image, max_colors)
    };

    let mut nearest: HashMap<Channels, u8> = HashMap::new();
    let indices = image
        .pixels()
        .map(|pixel| {
            let key = channels(pixel);
            *nearest.entry(key).or_insert_with(|| {
                let index = palette
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, entry)| distance(key, **entry))
                    .map_or(0, |(i, _)| i);
                u8::try_from(index).unwrap_or(u8::MAX)
            })
        })
        .collect();

    IndexedImage {
        width: image.width(),
        height: image.height(),
        palette,
        indices,
    }
}
