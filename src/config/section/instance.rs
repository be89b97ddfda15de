//! `[instance]` section configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Default base URL when no config file is present.
pub const DEFAULT_URL: &str = "http://localhost";

/// Instance settings.
///
/// # Example
///
/// ```toml
/// [instance]
/// url = "https://gitlab.example.com"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    /// Base URL prefixed to every absolute URL (e.g., "https://gitlab.example.com").
    pub url: String,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
        }
    }
}

impl InstanceConfig {
    pub const URL: FieldPath = FieldPath::new("instance.url");

    /// Validate instance configuration.
    ///
    /// # Checks
    /// - `url` must be a valid URL with scheme (e.g., `https://gitlab.example.com`)
    /// - scheme must be http or https, host is required
    /// - no query string or fragment, paths are appended verbatim
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let url = self.url.as_str();
        match url::Url::parse(url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    let reason = format!("scheme `{}` is not http or https", parsed.scheme());
                    diag.reject(Self::URL, url, reason);
                }
                if parsed.host_str().is_none() {
                    diag.reject(Self::URL, url, "has no host");
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.reject(Self::URL, url, "carries a query string or fragment");
                }
            }
            Err(e) => diag.reject(Self::URL, url, format!("not an absolute URL ({e})")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(url: &str) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        InstanceConfig { url: url.into() }.validate(&mut diag);
        diag
    }

    #[test]
    fn test_valid_urls() {
        assert!(check("https://gitlab.example.com").is_empty());
        assert!(check("http://localhost:3000").is_empty());
        assert!(check("https://example.com/gitlab").is_empty());
    }

    #[test]
    fn test_default_is_valid() {
        let mut diag = ConfigDiagnostics::new();
        InstanceConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_rejects_bad_scheme() {
        let diag = check("ftp://example.com");
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.rejected()[0].reason, "scheme `ftp` is not http or https");
        assert_eq!(diag.rejected()[0].value, "ftp://example.com");
    }

    #[test]
    fn test_rejects_relative() {
        let diag = check("gitlab.example.com");
        assert!(diag.rejected()[0].reason.starts_with("not an absolute URL"));
    }

    #[test]
    fn test_rejects_query_and_fragment() {
        assert!(!check("https://example.com/?a=1").is_empty());
        assert!(!check("https://example.com/#top").is_empty());
    }
}
