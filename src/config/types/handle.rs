//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! The resolver calls [`cfg`] on every resolution, so an [`init_config`] or a
//! [`set_base_url`] is picked up by the very next call.

use crate::config::UrlBuilderConfig;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<UrlBuilderConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(UrlBuilderConfig::default()));

#[inline]
pub fn cfg() -> Arc<UrlBuilderConfig> {
    CONFIG.load_full()
}

/// Publish `config` as the current configuration.
#[inline]
pub fn init_config(config: UrlBuilderConfig) -> Arc<UrlBuilderConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

/// Replace the base URL of the current config.
///
/// The new value goes through the same validation as `[instance] url`.
pub fn set_base_url(url: &str) -> Result<()> {
    let mut config = (*cfg()).clone();
    config.instance.url = url.to_string();
    config.validate()?;
    CONFIG.store(Arc::new(config));
    Ok(())
}
