use std::path::Path;
use std::sync::Arc;

use swatch_core::{quantize, Palette, TextColorPolicy};

use crate::assets::AssetLoader;
use crate::error::ThemeError;
use crate::models::{AppConfig, Swatch, Theme};
use crate::services::image_loader::{load_png, sample_pixels};
use crate::services::template_service::{TemplateService, ThemeContext};

/// Per-invocation overrides of the loaded configuration
#[derive(Debug, Clone, Default)]
pub struct ThemeRequest {
    /// Palette size instead of `palette.size`
    pub size: Option<usize>,
    /// Text color policy instead of `text.policy`
    pub policy: Option<TextColorPolicy>,
    /// Template name instead of `theme.template`
    pub template: Option<String>,
}

/// Result from running the theme pipeline
#[derive(Debug)]
pub struct ThemeResult {
    pub palette: Palette,
    pub swatches: Vec<Swatch>,
    pub theme: Theme,
    /// Rendered template output
    pub rendered: String,
}

/// Theme pipeline that orchestrates image → palette → text colors → template
pub struct ThemePipeline {
    config: Arc<AppConfig>,
    template_service: TemplateService,
}

impl ThemePipeline {
    pub fn new(config: Arc<AppConfig>, assets: Arc<AssetLoader>) -> Self {
        Self {
            config,
            template_service: TemplateService::new(assets),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn policy(&self, request: &ThemeRequest) -> TextColorPolicy {
        request.policy.unwrap_or_else(|| self.config.text.policy())
    }

    /// Decode, sample and quantize an image
    pub fn extract_palette(&self, image: &Path, request: &ThemeRequest) -> Result<Palette, ThemeError> {
        let decoded = load_png(image)?;
        let pixels = sample_pixels(decoded.pixels, &self.config.palette)?;
        let size = request.size.unwrap_or(self.config.palette.size);

        let palette = quantize(pixels, size)?;

        tracing::info!(
            image = %image.display(),
            requested = size,
            swatches = palette.len(),
            "Extracted palette"
        );
        Ok(palette)
    }

    /// Palette entries with their selected text colors
    pub fn swatches(&self, image: &Path, request: &ThemeRequest) -> Result<Vec<Swatch>, ThemeError> {
        let palette = self.extract_palette(image, request)?;
        Ok(Swatch::for_palette(
            &palette,
            self.policy(request),
            &self.config.text.options(),
        )?)
    }

    /// Run the whole pipeline for one image
    pub fn generate(&self, image: &Path, request: &ThemeRequest) -> Result<ThemeResult, ThemeError> {
        let palette = self.extract_palette(image, request)?;
        let policy = self.policy(request);
        let options = self.config.text.options();

        let swatches = Swatch::for_palette(&palette, policy, &options)?;
        let theme = Theme::from_palette(&palette, policy, &options)?;

        let template = request
            .template
            .as_deref()
            .unwrap_or(&self.config.theme.template);
        let source = image.display().to_string();
        let context = ThemeContext {
            source: &source,
            palette: palette.to_hex_strings(),
            theme: &theme,
            swatches: &swatches,
        };
        let rendered = self.template_service.render_theme(template, &context)?;

        tracing::debug!(%template, %policy, "Theme generated");

        Ok(ThemeResult {
            palette,
            swatches,
            theme,
            rendered,
        })
    }
}
