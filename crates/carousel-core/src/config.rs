use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SOURCE_LOCATION;
use crate::error::{CarouselError, Result};
use crate::input::SwipeConfig;
use crate::source::AllowList;

/// Everything needed to start a carousel session.
///
/// Every field has a default, so a partial TOML file (or an empty one) is
/// valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub allowed_hosts: AllowList,
    pub source: SourceConfig,
    pub swipe: SwipeConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// File path or `http(s)://` URL of the image listing.
    pub location: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_SOURCE_LOCATION.to_string(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: AllowList::default(),
            source: SourceConfig::default(),
            swipe: SwipeConfig::default(),
        }
    }
}

impl CarouselConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.location.trim().is_empty() {
            return Err(CarouselError::InvalidConfig(
                "source.location must not be empty".into(),
            ));
        }
        if self.allowed_hosts.is_empty() {
            return Err(CarouselError::InvalidConfig(
                "allowed_hosts must list at least one host".into(),
            ));
        }
        if !self.swipe.threshold.is_finite() || self.swipe.threshold < 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "swipe.threshold must be a non-negative number, got {}",
                self.swipe.threshold
            )));
        }
        Ok(())
    }
}
