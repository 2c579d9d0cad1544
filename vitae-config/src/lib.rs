//! Shared configuration loader for the vitae toolchain.
//!
//! `defaults/vitae.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`VitaeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use vitae::{AssembleOptions, Assembler, HeadingPassThrough, Locale, PlainPassThrough, Schema};

const DEFAULT_TOML: &str = include_str!("../defaults/vitae.default.toml");

/// Top-level configuration consumed by vitae applications.
#[derive(Debug, Clone, Deserialize)]
pub struct VitaeConfig {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// Knobs for the transcoding pass.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub locale: LocaleSetting,
    pub pass_through: PassThroughKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocaleSetting {
    Auto,
    En,
    El,
}

impl LocaleSetting {
    /// The forced locale, or `None` to detect it per document.
    pub fn resolve(self) -> Option<Locale> {
        match self {
            LocaleSetting::Auto => None,
            LocaleSetting::En => Some(Locale::En),
            LocaleSetting::El => Some(Locale::El),
        }
    }
}

/// Which fallback renders sections without a CV role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PassThroughKind {
    Headings,
    Plain,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub timestamp: bool,
}

impl VitaeConfig {
    /// Build an assembler over the bundled schema.
    ///
    /// `stamp` is only called when timestamps are enabled.
    pub fn assembler(&self, stamp: impl FnOnce() -> String) -> Assembler {
        let options = AssembleOptions {
            locale: self.render.locale.resolve(),
            stamp: self.output.timestamp.then(stamp),
        };
        let assembler = Assembler::new(Schema::bundled()).with_options(options);
        match self.render.pass_through {
            PassThroughKind::Headings => assembler.with_pass_through(HeadingPassThrough),
            PassThroughKind::Plain => assembler.with_pass_through(PlainPassThrough),
        }
    }
}

/// Layers config files and `render.*`/`output.*` overrides over the embedded vitae defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from `defaults/vitae.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file; `build` fails if it is missing.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file that may not exist, such as a per-user config.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one key, e.g. `render.locale` from `vitae convert --locale`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize into [`VitaeConfig`].
    pub fn build(self) -> Result<VitaeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The configuration used when no file or override is given.
pub fn load_defaults() -> Result<VitaeConfig, ConfigError> {
    Loader::new().build()
}
