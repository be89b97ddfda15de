//! Configuration management for `urlbuilder.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   └── instance   # [instance]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # UrlBuilderConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                       |
//! |--------------|-----------------------------------------------|
//! | `[instance]` | Base URL used to build absolute URLs          |

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, normalize_base_url};

pub use section::InstanceConfig;
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, set_base_url,
};

use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "urlbuilder.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing urlbuilder.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlBuilderConfig {
    /// Absolute path to the config file, empty when running on defaults (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Instance settings
    #[serde(default)]
    pub instance: InstanceConfig,
}

impl UrlBuilderConfig {
    /// Locate `config_name` (upward from cwd) and load it, falling back to
    /// defaults when no file exists.
    pub fn discover(config_name: &Path, base_url_override: Option<&str>) -> Result<Self> {
        match find_config_file(config_name) {
            Some(path) => Self::load(&path, base_url_override),
            None => {
                let mut config = Self::default();
                config.apply_override(base_url_override);
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Load, override and validate the config file at `path`.
    pub fn load(path: &Path, base_url_override: Option<&str>) -> Result<Self> {
        let mut config = Self::from_path(path)?;
        config.config_path = path.to_path_buf();
        config.apply_override(base_url_override);
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    fn apply_override(&mut self, base_url_override: Option<&str>) {
        if let Some(url) = base_url_override {
            self.instance.url = url.to_string();
        }
    }

    /// Normalize and validate all sections.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.instance.url = normalize_base_url(&self.instance.url);
        if self.instance.url.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{} must not be empty",
                InstanceConfig::URL.as_str()
            )));
        }

        let mut diag = ConfigDiagnostics::new();
        self.instance.validate(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Base URL without trailing slash.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.instance.url
    }
}

// ============================================================================
// tests
// ============================================================================
