//! Resolution error types.
//!
//! Only two things can go wrong when building a URL: the entity has no URL
//! rule at all, or its JSON could not be decoded. A missing relation is not
//! an error; the resolver returns an empty string for it.

use thiserror::Error;

/// URL resolution errors
#[derive(Debug, Error)]
pub enum UrlError {
    /// The entity's concrete type has no path rule.
    #[error("no URL builder defined for {type_name}")]
    UnsupportedType { type_name: String },

    /// Entity JSON has no string `type` tag.
    #[error("entity is missing its `type` tag")]
    MissingType,

    #[error("malformed entity: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UrlError {
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }
}
