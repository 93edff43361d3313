//! Highlight configuration.
//!
//! Loaded from YAML; every field is optional:
//!
//! ```yaml
//! target_luminance: 300   # nits of the display being checked
//! default_luminance: 80   # nits for sources without a luminance tag
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::consts::{DEFAULT_LUMINANCE, DEFAULT_TARGET_LUMINANCE};
use crate::{MeasureError, MeasureResult};

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file not found.
    #[error("config file not found: {path}")]
    NotFound {
        /// Path that was searched.
        path: PathBuf,
    },
}

/// Parameters of a highlight measurement.
///
/// # Example
///
/// ```rust
/// use hilux_analyze::HighlightConfig;
///
/// let config = HighlightConfig::from_yaml_str("target_luminance: 1000").unwrap();
/// assert_eq!(config.target_luminance, 1000);
/// assert_eq!(config.default_luminance, 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
    /// Luminance ceiling of the target display in nits.
    pub target_luminance: u32,
    /// Luminance assumed for sources without a luminance tag.
    pub default_luminance: u32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            target_luminance: DEFAULT_TARGET_LUMINANCE,
            default_luminance: DEFAULT_LUMINANCE,
        }
    }
}

impl HighlightConfig {
    /// Config for a `target_luminance` nit display.
    pub fn new(target_luminance: u32) -> Self {
        Self { target_luminance, ..Self::default() }
    }

    /// Sets the fallback luminance for untagged sources.
    pub fn with_default_luminance(mut self, default_luminance: u32) -> Self {
        self.default_luminance = default_luminance;
        self
    }

    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound { path: path.to_path_buf() });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Checks the configuration can drive a measurement.
    pub fn validate(&self) -> MeasureResult<()> {
        if self.target_luminance == 0 {
            return Err(MeasureError::InvalidConfig(
                "target luminance must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
