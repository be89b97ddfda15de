//! URL resolution.
//!
//! ```text
//! entity ──► classify ──► build_path ──► prefix
//!              │              │            │
//!   unsupported type      missing      only_path?
//!   (error)               relation     path : base_url + path
//!                         ("")
//! ```
//!
//! # Submodules
//!
//! - [`kind`]: closed set of URL rules, classification
//! - [`path`]: one path builder per kind, rendering modifiers
//! - [`options`]: `UrlOptions`

pub mod kind;
pub mod options;
pub mod path;

pub use kind::{Classified, Kind, classify};
pub use options::UrlOptions;
pub use path::build_path;

use crate::config::cfg;
use crate::debug;
use crate::entity::Entity;
use crate::error::UrlError;

/// Resolve `entity` to its canonical URL.
///
/// Returns the path alone with `only_path`, otherwise the path prefixed with
/// the configured base URL (read on every call). An entity missing a
/// relation its path needs resolves to an empty string.
///
/// # Errors
///
/// [`UrlError::UnsupportedType`] when the entity has no URL rule.
pub fn resolve(entity: &Entity, options: &UrlOptions) -> Result<String, UrlError> {
    let Classified { kind, entity } = classify(entity)?;

    let Some(path) = build_path(kind, entity, options) else {
        debug!("url"; "{} is missing a relation its path needs, resolving to empty", kind);
        return Ok(String::new());
    };

    if options.only_path {
        return Ok(path);
    }

    Ok(format!("{}{}", cfg().base_url(), path))
}
