//! Errors raised while loading `urlbuilder.toml`.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Shown under rejected values as a shape to copy.
const EXAMPLE_URL: &str = "https://gitlab.example.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file is not valid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("invalid base URL: {0}")]
    Validation(String),

    // not #[from]: a source() here would print every rejection twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// A config value that was rejected, and why.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    /// The value after normalization, as the resolver would have used it.
    pub value: String,
    pub reason: String,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:?}: {}", self.field, self.value, self.reason)
    }
}

/// Rejections collected over one validation pass.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    rejected: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, field: FieldPath, value: &str, reason: impl Into<String>) {
        self.rejected.push(ConfigDiagnostic {
            field,
            value: value.to_string(),
            reason: reason.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn rejected(&self) -> &[ConfigDiagnostic] {
        &self.rejected
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.rejected.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "base URL rejected:".red().bold())?;
        for diagnostic in &self.rejected {
            writeln!(f, "  {} {diagnostic}", "-".red())?;
        }
        write!(
            f,
            "  {} use an absolute http(s) URL such as {EXAMPLE_URL}",
            "hint:".yellow()
        )
    }
}

impl std::error::Error for ConfigDiagnostics {}
