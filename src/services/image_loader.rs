//! PNG decoding and pixel sampling.
//!
//! The color engine only consumes a flat list of [`Rgba`] pixels; this
//! module turns any 8- or 16-bit PNG into that list.

use std::io::Cursor;
use std::path::Path;

use swatch_core::Rgba;

use crate::error::ImageError;
use crate::models::PaletteConfig;

/// A decoded image as straight-alpha RGBA pixels
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgba>,
}

/// Read and decode a PNG file
pub fn load_png(path: &Path) -> Result<DecodedImage, ImageError> {
    let data = std::fs::read(path)?;
    let image = decode_png(&data)?;
    tracing::info!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        "Decoded image"
    );
    Ok(image)
}

/// Decode PNG bytes, expanding every color type to RGBA
pub fn decode_png(data: &[u8]) -> Result<DecodedImage, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    // Palette -> RGB, tRNS -> alpha, low bit depths -> 8, 16 bit -> 8
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    buf.truncate(frame.buffer_size());

    if frame.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::UnsupportedFormat(format!(
            "{:?} bit depth after expansion",
            frame.bit_depth
        )));
    }

    let pixels: Vec<Rgba> = match frame.color_type {
        png::ColorType::Rgba => buf
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect(),
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .map(|c| Rgba::opaque(c[0], c[1], c[2]))
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .map(|c| Rgba::new(c[0], c[0], c[0], c[1]))
            .collect(),
        png::ColorType::Grayscale => buf.iter().map(|&v| Rgba::opaque(v, v, v)).collect(),
        other => {
            return Err(ImageError::UnsupportedFormat(format!(
                "{other:?} color type after expansion"
            )))
        }
    };

    Ok(DecodedImage {
        width: frame.width,
        height: frame.height,
        pixels,
    })
}

/// Select the pixels handed to the quantizer.
///
/// Drops fully transparent pixels when `skip_transparent` is set, then
/// keeps every n-th pixel so that at most `sample_limit` remain
/// (`sample_limit == 0` keeps all).
pub fn sample_pixels(pixels: Vec<Rgba>, config: &PaletteConfig) -> Result<Vec<Rgba>, ImageError> {
    let total = pixels.len();

    let visible: Vec<Rgba> = if config.skip_transparent {
        pixels.into_iter().filter(|c| c.a != 0).collect()
    } else {
        pixels
    };

    if visible.is_empty() {
        return Err(ImageError::Empty);
    }

    let sampled = if config.sample_limit > 0 && visible.len() > config.sample_limit {
        let stride = visible.len().div_ceil(config.sample_limit);
        visible.into_iter().step_by(stride).collect()
    } else {
        visible
    };

    tracing::debug!(total, sampled = sampled.len(), "Sampled pixels");
    Ok(sampled)
}
