//! urlbuilder - canonical URLs for code-hosting entities.
//!
//! ```ignore
//! use urlbuilder::{Entity, UrlOptions, entity::Project, resolve};
//!
//! let project = Entity::from(Project::new("gitlab-org/gitlab"));
//! let url = resolve(&project, &UrlOptions::new())?;
//! ```

pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod loader;
pub mod logger;
pub mod resolver;

pub use entity::Entity;
pub use error::UrlError;
pub use loader::{BatchLoader, Lazy};
pub use resolver::{Classified, Kind, UrlOptions, build_path, classify, resolve};
