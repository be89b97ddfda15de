//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Sections declare their field paths as associated constants so that
/// diagnostics always name a real key.
///
/// # Example
///
/// ```ignore
/// impl InstanceConfig {
///     pub const URL: FieldPath = FieldPath::new("instance.url");
/// }
///
/// diag.reject(InstanceConfig::URL, &self.url, "has no host");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}
