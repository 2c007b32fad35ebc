//! Configuration types for nbrebuild.
//!
//! [`Config::load`] reads `~/.config/nbrebuild/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::format::{FormatPolicy, NBFORMAT, NBFORMAT_MINOR};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[format]
nbformat       = 4
nbformat_minor = 5
indent         = 1
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/nbrebuild/config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub format: FormatConfig,
}

/// `[format]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormatConfig {
    /// Must stay 4; other majors are rejected when the config is loaded.
    #[serde(default = "default_nbformat")]
    pub nbformat: u32,
    #[serde(default = "default_nbformat_minor")]
    pub nbformat_minor: u32,
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_nbformat() -> u32 { NBFORMAT }
fn default_nbformat_minor() -> u32 { NBFORMAT_MINOR }
fn default_indent() -> usize { 1 }

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            nbformat: default_nbformat(),
            nbformat_minor: default_nbformat_minor(),
            indent: default_indent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/nbrebuild/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit config file, layered on top of the built-in defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self {
            format: FormatConfig::default(),
        }
    }

    /// The reader/writer policy described by the `[format]` section.
    pub fn policy(&self) -> FormatPolicy {
        FormatPolicy {
            nbformat: self.format.nbformat,
            nbformat_minor: self.format.nbformat_minor,
            indent: self.format.indent,
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.format.nbformat == NBFORMAT,
            "format.nbformat = {} is not supported; only {NBFORMAT} is",
            self.format.nbformat
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("nbrebuild")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
