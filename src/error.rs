use swatch_core::SwatchError;
use thiserror::Error;

use crate::services::template_service::TemplateError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("Unsupported PNG format: {0}")]
    UnsupportedFormat(String),

    #[error("Image has no usable pixels")]
    Empty,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Color engine error: {0}")]
    Engine(#[from] SwatchError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl From<swatch_core::QuantizeError> for ThemeError {
    fn from(e: swatch_core::QuantizeError) -> Self {
        ThemeError::Engine(e.into())
    }
}

impl From<swatch_core::ContrastError> for ThemeError {
    fn from(e: swatch_core::ContrastError) -> Self {
        ThemeError::Engine(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::{ContrastError, QuantizeError};

    #[test]
    fn test_config_error_invalid() {
        let error = ConfigError::Invalid("palette.size must be at least 1".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid config: palette.size must be at least 1"
        );
    }

    #[test]
    fn test_image_error_empty() {
        let error = ImageError::Empty;
        assert_eq!(error.to_string(), "Image has no usable pixels");
    }

    #[test]
    fn test_image_error_unsupported() {
        let error = ImageError::UnsupportedFormat("16-bit".to_string());
        assert_eq!(error.to_string(), "Unsupported PNG format: 16-bit");
    }

    #[test]
    fn test_theme_error_from_image_error() {
        let theme_error: ThemeError = ImageError::Empty.into();
        match theme_error {
            ThemeError::Image(ImageError::Empty) => {}
            other => panic!("Expected Image variant, got {other:?}"),
        }
    }

    #[test]
    fn test_theme_error_from_engine_errors() {
        let error: ThemeError = QuantizeError::EmptyInput.into();
        assert_eq!(
            error.to_string(),
            "Color engine error: quantize error: cannot quantize an empty color collection"
        );

        let error: ThemeError = ContrastError::TranslucentBackground { alpha: 0 }.into();
        assert!(matches!(
            error,
            ThemeError::Engine(SwatchError::Contrast(_))
        ));
    }
}
