//! Configuration loading
//!
//! `defaults/itemfilter.default.toml` is embedded into the binary. User files and single
//! key overrides are layered on top with [Loader] before deserializing into
//! [FilterConfig].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/itemfilter.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    pub output: OutputConfig,
    pub check: CheckConfig,
}

/// Text and JSON output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Default processing spec, e.g. `blocks-text`
    pub format: String,
    pub indent: String,
    /// 0 means unlimited
    pub max_width: usize,
    pub line_numbers: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub show_source: bool,
}

/// Layers user settings over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file that must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file if it exists.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override a single key, e.g. `output.max_width`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<FilterConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<FilterConfig, ConfigError> {
    Loader::new().build()
}
