//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Normalize a base URL for prefixing.
///
/// Paths produced by the resolver always start with `/`, so the base must
/// not end with one.
///
/// # Examples
/// ```ignore
/// normalize_base_url("https://gitlab.example.com/")  -> "https://gitlab.example.com"
/// normalize_base_url(" https://example.com/gitlab ") -> "https://example.com/gitlab"
/// ```
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/repo/tools/        ← cwd
/// /home/user/repo/urlbuilder.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;

    // Walk up from cwd looking for config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://gitlab.example.com/"),
            "https://gitlab.example.com"
        );
        assert_eq!(
            normalize_base_url(" https://example.com/gitlab// "),
            "https://example.com/gitlab"
        );
        assert_eq!(normalize_base_url("http://localhost"), "http://localhost");
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urlbuilder.toml");
        assert_eq!(find_config_file(&path), None);

        std::fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path), Some(path));
    }
}
