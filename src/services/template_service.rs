use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tera::{Context, Tera};

use crate::assets::AssetLoader;
use crate::models::{Swatch, Theme};

/// Error type for template rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),
}

/// Data handed to theme templates
#[derive(Debug, Serialize)]
pub struct ThemeContext<'a> {
    /// Image the palette was extracted from
    pub source: &'a str,
    /// Palette as `#rrggbb` strings, in palette order
    pub palette: Vec<String>,
    pub theme: &'a Theme,
    pub swatches: &'a [Swatch],
}

/// Service for rendering theme templates with Tera
pub struct TemplateService {
    assets: Arc<AssetLoader>,
}

impl TemplateService {
    /// Create a new template service
    pub fn new(assets: Arc<AssetLoader>) -> Self {
        tracing::info!(
            templates = assets.list_templates().len(),
            "Template service initialized"
        );
        Self { assets }
    }

    /// Register custom Tera filters
    fn register_filters(tera: &mut Tera) {
        // "#1a2b3c" -> "1a2b3c", for formats that take bare hex
        tera.register_filter(
            "strip_hash",
            |value: &tera::Value, _: &HashMap<String, tera::Value>| {
                let s = tera::try_get_value!("strip_hash", "value", String, value);
                Ok(tera::Value::String(
                    s.strip_prefix('#').unwrap_or(&s).to_string(),
                ))
            },
        );

        // "#1a2b3c" | alpha(value="cc") -> "#1a2b3ccc"
        tera.register_filter(
            "alpha",
            |value: &tera::Value, args: &HashMap<String, tera::Value>| {
                let s = tera::try_get_value!("alpha", "value", String, value);
                let alpha = args.get("value").and_then(|v| v.as_str()).unwrap_or("ff");
                Ok(tera::Value::String(format!("{s}{alpha}")))
            },
        );
    }

    /// Render a template with the given data.
    /// Templates are loaded fresh on every call so edits apply immediately.
    pub fn render<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String, TemplateError> {
        let template_content = self
            .assets
            .read_template_string(template_name)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => TemplateError::NotFound(template_name.to_string()),
                _ => TemplateError::Io(e),
            })?;

        let mut tera = Tera::default();
        tera.add_raw_template(template_name, &template_content)?;
        Self::register_filters(&mut tera);

        let context = Context::from_serialize(data)?;
        let rendered = tera.render(template_name, &context)?;

        tracing::debug!(template = %template_name, bytes = rendered.len(), "Rendered template");
        Ok(rendered)
    }

    /// Render a theme through the named template
    pub fn render_theme(
        &self,
        template_name: &str,
        context: &ThemeContext<'_>,
    ) -> Result<String, TemplateError> {
        self.render(template_name, context)
    }
}
