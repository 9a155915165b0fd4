//! PNG writers for the two sheets.

#![forbid(unsafe_code)]

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use image::{ImageFormat, RgbaImage};

use crate::{
    error::{IoError, RenderError, SheetResult},
    render::quantize::IndexedImage,
};

fn create(path: &Path) -> SheetResult<BufWriter<File>> {
    let file = File::create(path).map_err(|source| IoError::WriteImage {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Write an 8-bit palette PNG.
pub fn write_indexed_png(path: &Path, image: &IndexedImage) -> SheetResult<PathBuf> {
    if image.width == 0 || image.height == 0 {
        return Err(RenderError::CanvasSize {
            width: image.width,
            height: image.height,
        }
        .into());
    }
    let encoding = |source: png::EncodingError| RenderError::EncodeIndexed {
        path: path.to_path_buf(),
        source,
    };

    let palette: Vec<u8> = image
        .palette
        .iter()
        .flat_map(|c| [c.red, c.green, c.blue])
        .collect();

    let mut encoder = png::Encoder::new(create(path)?, image.width, image.height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(palette);
    let mut writer = encoder.write_header().map_err(encoding)?;
    writer.write_image_data(&image.indices).map_err(encoding)?;
    writer.finish().map_err(encoding)?;
    Ok(path.to_path_buf())
}

/// Write a full-color RGBA PNG.
pub fn write_rgba_png(path: &Path, image: &RgbaImage) -> SheetResult<PathBuf> {
    if image.width() == 0 || image.height() == 0 {
        return Err(RenderError::CanvasSize {
            width: image.width(),
            height: image.height(),
        }
        .into());
    }
    let mut writer = create(path)?;
    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|source| RenderError::EncodeRgba {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|source| IoError::WriteImage {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;
    use crate::{color::Rgb, error::SheetError, render::quantize::quantize};

    #[test]
    fn indexed_png_keeps_palette() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("indexed.png");
        let image = RgbaImage::from_fn(4, 3, |x, _| {
            if x % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 0, 0, 255])
            }
        });
        let indexed = quantize(&image, 3);
        write_indexed_png(&path, &indexed).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!(info.color_type, png::ColorType::Indexed);
        assert_eq!((info.width, info.height), (4, 3));
        assert_eq!(info.palette.as_deref().map(<[u8]>::len), Some(6));

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded, image);
    }

    #[test]
    fn rgba_png_round_trips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        let image = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        let written = write_rgba_png(&path, &image).unwrap();
        assert_eq!(written, path);
        assert_eq!(image::open(&path).unwrap().to_rgba8(), image);
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("sheet.png");
        let image = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let err = write_rgba_png(&path, &image).unwrap_err();
        assert!(matches!(err, SheetError::Io(IoError::WriteImage { .. })));
    }

    #[test]
    fn empty_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let indexed = IndexedImage {
            width: 0,
            height: 0,
            palette: vec![Rgb::new(0, 0, 0)],
            indices: Vec::new(),
        };
        let err = write_indexed_png(&dir.path().join("empty.png"), &indexed).unwrap_err();
        assert!(matches!(
            err,
            SheetError::Render(RenderError::CanvasSize { .. })
        ));
    }
}
