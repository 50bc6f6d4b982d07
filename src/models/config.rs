use crate::assets::AssetLoader;
use crate::error::ConfigError;
use serde::{Deserialize, Deserializer};
use swatch_core::{ContrastOptions, TextColorPolicy};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Palette extraction settings
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Text color selection settings
    #[serde(default)]
    pub text: TextConfig,

    /// Theme rendering settings
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Configuration for palette extraction
#[derive(Debug, Deserialize, Clone)]
pub struct PaletteConfig {
    /// Number of swatches to extract
    #[serde(default = "default_palette_size")]
    pub size: usize,

    /// Ignore pixels with alpha 0
    #[serde(default = "default_true")]
    pub skip_transparent: bool,

    /// Upper bound on sampled pixels (0 disables sampling)
    #[serde(default = "default_sample_limit")]
    pub sample_limit: usize,
}

fn default_palette_size() -> usize {
    5
}

fn default_true() -> bool {
    true
}

fn default_sample_limit() -> usize {
    250_000
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            size: default_palette_size(),
            skip_transparent: true,
            sample_limit: default_sample_limit(),
        }
    }
}

/// Read a policy name through `TextColorPolicy::from_str`
fn deserialize_policy<'de, D>(deserializer: D) -> Result<TextColorPolicy, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

/// Configuration for text color selection
#[derive(Debug, Deserialize, Clone)]
pub struct TextConfig {
    #[serde(default, deserialize_with = "deserialize_policy")]
    pub policy: TextColorPolicy,

    #[serde(default = "default_min_contrast_body")]
    pub min_contrast_body: f64,

    #[serde(default = "default_min_contrast_title")]
    pub min_contrast_title: f64,

    #[serde(default = "default_max_search_iterations")]
    pub max_search_iterations: u32,

    #[serde(default = "default_search_precision")]
    pub search_precision: u8,
}

fn default_min_contrast_body() -> f64 {
    ContrastOptions::default().min_contrast_body
}

fn default_min_contrast_title() -> f64 {
    ContrastOptions::default().min_contrast_title
}

fn default_max_search_iterations() -> u32 {
    ContrastOptions::default().max_search_iterations
}

fn default_search_precision() -> u8 {
    ContrastOptions::default().search_precision
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            policy: TextColorPolicy::default(),
            min_contrast_body: default_min_contrast_body(),
            min_contrast_title: default_min_contrast_title(),
            max_search_iterations: default_max_search_iterations(),
            search_precision: default_search_precision(),
        }
    }
}

impl TextConfig {
    pub fn policy(&self) -> TextColorPolicy {
        self.policy
    }

    /// Contrast engine options built from this section
    pub fn options(&self) -> ContrastOptions {
        ContrastOptions::new()
            .min_contrast_body(self.min_contrast_body)
            .min_contrast_title(self.min_contrast_title)
            .max_search_iterations(self.max_search_iterations)
            .search_precision(self.search_precision)
    }
}

/// Configuration for theme rendering
#[derive(Debug, Deserialize, Clone)]
pub struct ThemeConfig {
    /// Template name (relative to the templates directory)
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_template() -> String {
    "i3.conf.tera".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
        }
    }
}

/// Valid range of a WCAG contrast ratio
const CONTRAST_RANGE: std::ops::RangeInclusive<f64> = 1.0..=21.0;

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        palette_size = config.palette.size,
                        policy = %config.text.policy(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engines cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.size < 1 {
            return Err(ConfigError::Invalid(
                "palette.size must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("text.min_contrast_body", self.text.min_contrast_body),
            ("text.min_contrast_title", self.text.min_contrast_title),
        ] {
            if !CONTRAST_RANGE.contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be between 1 and 21, got {value}"
                )));
            }
        }
        if self.text.search_precision < 1 {
            return Err(ConfigError::Invalid(
                "text.search_precision must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.palette.size, 5);
        assert!(config.palette.skip_transparent);
        assert_eq!(config.palette.sample_limit, 250_000);
        assert_eq!(config.text.policy(), TextColorPolicy::AlphaSearch);
        assert_eq!(config.text.options(), ContrastOptions::default());
        assert_eq!(config.theme.template, "i3.conf.tera");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
palette:
  size: 8
  skip_transparent: false
text:
  policy: binary_choice
  min_contrast_title: 7.0
theme:
  template: custom.tera
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.palette.size, 8);
        assert!(!config.palette.skip_transparent);
        assert_eq!(config.palette.sample_limit, 250_000);
        assert_eq!(config.text.policy(), TextColorPolicy::BinaryChoice);
        assert_eq!(config.text.min_contrast_body, 3.0);
        assert_eq!(config.text.options().min_contrast_title, 7.0);
        assert_eq!(config.theme.template, "custom.tera");
    }

    #[test]
    fn test_policy_alias() {
        let config = AppConfig::from_yaml("text:\n  policy: binary-choice\n").unwrap();
        assert_eq!(config.text.policy(), TextColorPolicy::BinaryChoice);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config.palette.size, 5);
    }

    #[test]
    fn test_policy_spellings() {
        for name in ["alpha_search", "alpha-search", "Alpha-Search"] {
            let config = AppConfig::from_yaml(&format!("text:\n  policy: {name}\n")).unwrap();
            assert_eq!(config.text.policy(), TextColorPolicy::AlphaSearch, "{name}");
        }
    }

    #[test]
    fn test_unknown_policy_message() {
        let err = AppConfig::from_yaml("text:\n  policy: kmeans\n").unwrap_err();
        assert!(err.to_string().contains("unknown text color policy 'kmeans'"), "{err}");
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result = AppConfig::from_yaml("text:\n  policy: kmeans\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_palette_size() {
        let result = AppConfig::from_yaml("palette:\n  size: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_contrast_range() {
        let mut config = AppConfig::default();
        config.text.min_contrast_title = 22.0;
        assert!(config.validate().is_err());

        config.text.min_contrast_title = 4.5;
        config.text.min_contrast_body = 0.5;
        assert!(config.validate().is_err());

        config.text.min_contrast_body = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_precision() {
        let result = AppConfig::from_yaml("text:\n  search_precision: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_embedded_config_is_valid() {
        let loader = AssetLoader::new(None, None);
        let content = loader.read_config_string().unwrap();
        let config = AppConfig::from_yaml(&content).unwrap();
        assert_eq!(config.palette.size, 5);
        assert_eq!(config.text.policy(), TextColorPolicy::AlphaSearch);
    }
}
