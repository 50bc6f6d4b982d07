//! Asset loading with embedded fallbacks
//!
//! Templates and the default config are compiled into the binary:
//!
//! - If an override path is NOT set: use embedded assets only (no filesystem access)
//! - If an override path IS set: use the filesystem, falling back to embedded
//!   assets for anything missing there

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded theme templates
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.tera"]
struct EmbeddedTemplates;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Templates,
    Config,
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External templates directory (from TEMPLATES_DIR)
    templates_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE or --config)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if an override was requested.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(templates_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            templates_dir,
            config_file,
        }
    }

    /// Build a loader from the TEMPLATES_DIR and CONFIG_FILE env vars
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("TEMPLATES_DIR").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    /// Replace the config file path (CLI flag beats env var)
    pub fn with_config_file(mut self, config_file: Option<PathBuf>) -> Self {
        if config_file.is_some() {
            self.config_file = config_file;
        }
        self
    }

    /// Read a template
    ///
    /// If an external directory is configured, tries filesystem first, then falls back to embedded.
    pub fn read_template(&self, name: &str) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref dir) = self.templates_dir {
            let full_path = dir.join(name);
            if full_path.exists() {
                tracing::trace!(path = %full_path.display(), "Loading template from filesystem");
                return Ok(Cow::Owned(fs::read(&full_path)?));
            }
        }

        EmbeddedTemplates::get(name)
            .map(|f| {
                tracing::trace!(template = %name, "Loading template from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("Template not found: {name}"))
            })
    }

    /// Read a template as a UTF-8 string
    pub fn read_template_string(&self, name: &str) -> io::Result<String> {
        let bytes = self.read_template(name)?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// List all available templates (merged view of embedded + external)
    pub fn list_templates(&self) -> Vec<String> {
        let mut files: BTreeSet<String> =
            EmbeddedTemplates::iter().map(|s| s.to_string()).collect();

        if let Some(ref dir) = self.templates_dir {
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.flatten() {
                    if let Some(name) = entry.file_name().to_str() {
                        if name.ends_with(".tera") {
                            files.insert(name.to_string());
                        }
                    }
                }
            }
        }

        files.into_iter().collect()
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::warn!(path = %path.display(), "Config file not found, using embedded default");
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths (or defaults if not set).
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Templates => {
                    let dir = self
                        .templates_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./templates"));
                    fs::create_dir_all(&dir)?;

                    for file in EmbeddedTemplates::iter() {
                        let path = dir.join(file.as_ref());
                        if let Some(data) = EmbeddedTemplates::get(&file) {
                            write_asset(&path, &data.data, force, &mut report)?;
                        }
                    }
                }
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./config.yaml"));
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    if let Some(data) = EmbeddedConfig::get("config.yaml") {
                        write_asset(&path, &data.data, force, &mut report)?;
                    }
                }
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Templates => EmbeddedTemplates::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => vec!["config.yaml".to_string()],
        }
    }
}

fn write_asset(path: &Path, data: &[u8], force: bool, report: &mut InitReport) -> io::Result<()> {
    if !force && path.exists() {
        report.skipped.push(path.display().to_string());
        return Ok(());
    }
    fs::write(path, data)?;
    report.written.push(path.display().to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_template_available() {
        let loader = AssetLoader::new(None, None);
        let template = loader.read_template_string("i3.conf.tera").unwrap();
        assert!(template.contains("client.focused"));
        assert!(loader.list_templates().contains(&"i3.conf.tera".to_string()));
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let loader = AssetLoader::new(None, None);
        let err = loader.read_template("nope.tera").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_external_template_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("i3.conf.tera"), "custom").unwrap();
        fs::write(dir.path().join("extra.tera"), "extra").unwrap();

        let loader = AssetLoader::new(Some(dir.path().to_path_buf()), None);
        assert_eq!(loader.read_template_string("i3.conf.tera").unwrap(), "custom");
        assert_eq!(
            loader.list_templates(),
            vec!["extra.tera".to_string(), "i3.conf.tera".to_string()]
        );
    }

    #[test]
    fn test_missing_config_file_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(None, Some(dir.path().join("absent.yaml")));
        let config = loader.read_config_string().unwrap();
        assert!(config.contains("palette:"));
    }

    #[test]
    fn test_cli_config_beats_env() {
        let loader = AssetLoader::new(None, Some(PathBuf::from("env.yaml")))
            .with_config_file(Some(PathBuf::from("cli.yaml")));
        assert_eq!(loader.config_file, Some(PathBuf::from("cli.yaml")));

        let loader = AssetLoader::new(None, Some(PathBuf::from("env.yaml"))).with_config_file(None);
        assert_eq!(loader.config_file, Some(PathBuf::from("env.yaml")));
    }

    #[test]
    fn test_init_writes_then_skips() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(
            Some(dir.path().join("templates")),
            Some(dir.path().join("config.yaml")),
        );
        let all = [AssetCategory::Templates, AssetCategory::Config];

        let first = loader.init(&all, false).unwrap();
        assert_eq!(first.written.len(), 2);
        assert!(first.skipped.is_empty());
        assert!(dir.path().join("templates/i3.conf.tera").exists());

        let second = loader.init(&all, false).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.skipped.len(), 2);

        let forced = loader.init(&all, true).unwrap();
        assert_eq!(forced.written.len(), 2);
    }
}
