//! Rendering options.

use serde::{Deserialize, Serialize};

/// Options accepted by [`resolve`](super::resolve).
///
/// Options a kind does not use are ignored. Unknown keys are ignored when
/// deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlOptions {
    /// Return the path without the base URL.
    pub only_path: bool,
    /// Link to the raw content (snippets).
    pub raw: bool,
    /// Git ref to render at (designs).
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    /// Resized image variant, only used together with `ref` (designs).
    pub size: Option<String>,
}

impl UrlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn only_path(mut self) -> Self {
        self.only_path = true;
        self
    }

    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    pub fn with_ref(mut self, git_ref: impl Into<String>) -> Self {
        self.git_ref = Some(git_ref.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}
