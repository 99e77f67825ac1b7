//! Configuration loader for md2mm.
//!
//! `defaults/md2mm.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`Md2mmConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use md2mm::{ConvertOptions, MarkdownExtensions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/md2mm.default.toml");

/// Top-level configuration consumed by md2mm applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Md2mmConfig {
    pub convert: ConvertConfig,
    pub markdown: MarkdownConfig,
    pub output: OutputConfig,
}

/// Mirrors [`ConvertOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub root_text: String,
    pub map_version: String,
    pub escape_backslashes: bool,
}

/// Parser extensions.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub table: bool,
    pub strikethrough: bool,
    pub autolink: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub file_name: String,
}

impl From<&Md2mmConfig> for ConvertOptions {
    fn from(config: &Md2mmConfig) -> Self {
        ConvertOptions {
            root_text: config.convert.root_text.clone(),
            map_version: config.convert.map_version.clone(),
            escape_backslashes: config.convert.escape_backslashes,
            extensions: MarkdownExtensions::from(&config.markdown),
        }
    }
}

impl From<&MarkdownConfig> for MarkdownExtensions {
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownExtensions {
            table: config.table,
            strikethrough: config.strikethrough,
            autolink: config.autolink,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Md2mmConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Md2mmConfig, ConfigError> {
    Loader::new().build()
}
