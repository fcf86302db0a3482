pub mod config;
pub mod parse;
pub mod walk;

use std::path::Path;

use anyhow::{Context, Result};
use carousel_core::config::CarouselConfig;

/// Load the config file if one was given, otherwise fall back to defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<CarouselConfig> {
    match path {
        Some(path) => CarouselConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(CarouselConfig::default()),
    }
}
