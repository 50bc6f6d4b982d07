pub mod image_loader;
pub mod template_service;
pub mod theme_pipeline;

pub use image_loader::{decode_png, load_png, sample_pixels, DecodedImage};
pub use template_service::{TemplateError, TemplateService, ThemeContext};
pub use theme_pipeline::{ThemePipeline, ThemeRequest, ThemeResult};
