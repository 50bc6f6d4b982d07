//! PNG decoding across color types and bit depths.

mod common;

use common::fixtures::write_png;
use pretty_assertions::assert_eq;
use swatch_core::Rgba;
use swatchbar::error::ImageError;
use swatchbar::models::PaletteConfig;
use swatchbar::services::{load_png, sample_pixels};

#[test]
fn test_indexed_png_expands_to_rgb() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("indexed.png");
    {
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), 3, 1);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(vec![255, 0, 0, 0, 255, 0]);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[1, 0, 1]).unwrap();
    }

    let image = load_png(&path).unwrap();
    assert_eq!(
        image.pixels,
        vec![
            Rgba::opaque(0, 255, 0),
            Rgba::opaque(255, 0, 0),
            Rgba::opaque(0, 255, 0)
        ]
    );
}

#[test]
fn test_indexed_png_with_transparency() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trns.png");
    {
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), 2, 1);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(vec![10, 20, 30, 40, 50, 60]);
        encoder.set_trns(vec![0, 255]);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[0, 1]).unwrap();
    }

    let image = load_png(&path).unwrap();
    assert_eq!(
        image.pixels,
        vec![Rgba::new(10, 20, 30, 0), Rgba::new(40, 50, 60, 255)]
    );

    let sampled = sample_pixels(image.pixels, &PaletteConfig::default()).unwrap();
    assert_eq!(sampled, vec![Rgba::opaque(40, 50, 60)]);
}

#[test]
fn test_sixteen_bit_is_stripped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deep.png");
    {
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), 1, 1);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Sixteen);
        let mut writer = encoder.write_header().unwrap();
        // Big-endian samples: 0x12ff, 0x8000, 0xffff
        writer
            .write_image_data(&[0x12, 0xff, 0x80, 0x00, 0xff, 0xff])
            .unwrap();
    }

    let image = load_png(&path).unwrap();
    assert_eq!(image.pixels, vec![Rgba::opaque(0x12, 0x80, 0xff)]);
}

#[test]
fn test_rgba_file_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let data: Vec<u8> = (0..6u8).flat_map(|i| [i, i, i, 255]).collect();
    let path = write_png(
        &dir.path().join("rgba.png"),
        3,
        2,
        png::ColorType::Rgba,
        &data,
    );

    let image = load_png(&path).unwrap();
    assert_eq!((image.width, image.height), (3, 2));
    assert_eq!(image.pixels.len(), 6);
    assert_eq!(image.pixels[5], Rgba::opaque(5, 5, 5));
}

#[test]
fn test_non_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.png");
    std::fs::write(&path, "GIF89a").unwrap();

    assert!(matches!(load_png(&path), Err(ImageError::Decode(_))));
}
