//! Test fixtures: generated PNGs and throwaway workspaces.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use swatchbar::assets::AssetLoader;
use swatchbar::models::AppConfig;
use swatchbar::services::ThemePipeline;

/// Solid colors used by the striped fixture image.
///
/// Four equally sized stripes quantize back to exactly these colors.
pub mod colors {
    pub const NAVY: (u8, u8, u8) = (20, 30, 90);
    pub const CREAM: (u8, u8, u8) = (240, 230, 200);
    pub const RUST: (u8, u8, u8) = (180, 70, 30);
    pub const MOSS: (u8, u8, u8) = (60, 110, 50);

    /// Stripe order, top to bottom
    pub const ALL: [(u8, u8, u8); 4] = [NAVY, CREAM, RUST, MOSS];

    /// Palette order after quantizing the stripes into four swatches
    pub const PALETTE: [&str; 4] = ["#f0e6c8", "#141e5a", "#b4461e", "#3c6e32"];
}

/// Encode raw 8-bit samples as a PNG file
pub fn write_png(
    path: &Path,
    width: u32,
    height: u32,
    color: png::ColorType,
    data: &[u8],
) -> PathBuf {
    let file = std::fs::File::create(path).expect("create png");
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("png header");
    writer.write_image_data(data).expect("png data");
    path.to_path_buf()
}

/// RGB image made of equally tall horizontal stripes, one per color
pub fn striped_rgb(colors: &[(u8, u8, u8)], width: u32, stripe_height: u32) -> Vec<u8> {
    let mut data = Vec::new();
    for &(r, g, b) in colors {
        for _ in 0..width * stripe_height {
            data.extend_from_slice(&[r, g, b]);
        }
    }
    data
}

/// A temp directory with a config file and a templates directory
pub struct TestWorkspace {
    pub dir: tempfile::TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("templates")).expect("templates dir");
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_config(&self, yaml: &str) -> &Self {
        std::fs::write(self.path("config.yaml"), yaml).expect("write config");
        self
    }

    pub fn write_template(&self, name: &str, body: &str) -> &Self {
        std::fs::write(self.path("templates").join(name), body).expect("write template");
        self
    }

    /// PNG with one stripe per fixture color
    pub fn striped_image(&self) -> PathBuf {
        let data = striped_rgb(&colors::ALL, 8, 4);
        write_png(
            &self.path("stripes.png"),
            8,
            4 * colors::ALL.len() as u32,
            png::ColorType::Rgb,
            &data,
        )
    }

    pub fn loader(&self) -> Arc<AssetLoader> {
        Arc::new(AssetLoader::new(
            Some(self.path("templates")),
            Some(self.path("config.yaml")),
        ))
    }

    pub fn pipeline(&self) -> ThemePipeline {
        let loader = self.loader();
        let config = Arc::new(AppConfig::load_from_assets(&loader));
        ThemePipeline::new(config, loader)
    }
}
