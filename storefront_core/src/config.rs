//! Site configuration.
//!
//! The landing page embeds `site.toml` at build time; there is no runtime
//! config file. Missing keys fall back to defaults; the caller decides what
//! to do with a file that does not parse.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, StorefrontError};
use crate::mode::BusinessMode;
use crate::timer::DEFAULT_PERIOD;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Carousel auto-advance period in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Mode shown on first load.
    pub initial_mode: BusinessMode,
    /// Max tracing level forwarded to the browser console.
    pub log_level: String,
    pub contact: ContactInfo,
}

/// Business contact details shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub address: String,
    pub phones: Vec<String>,
    pub email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: DEFAULT_PERIOD.as_millis() as u64,
            initial_mode: BusinessMode::default(),
            log_level: "info".into(),
            contact: ContactInfo::default(),
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            address: "123 Construction Road, Building Zone, Industrial Area".into(),
            phones: vec!["+91 9876543210".into(), "+91 1234567890".into()],
            email: "9O2oM@example.com".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig =
            toml::from_str(content).map_err(|e| StorefrontError::Config(e.to_string()))?;
        if config.autoplay_interval_ms == 0 {
            return Err(StorefrontError::Config(
                "autoplay_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(config)
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}
