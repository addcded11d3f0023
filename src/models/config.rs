use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::options::{Metric, ResampleFilter, Strategy};

/// Defaults loaded from a YAML config file
///
/// Every field is optional; command-line flags take priority over any value
/// set here.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Target width in cells
    pub width: Option<i64>,

    /// Number of colors (2-32)
    pub colors: Option<i64>,

    /// Language tag for captions and color names
    pub lang: Option<String>,

    /// Resampling filter used when shrinking
    pub filter: Option<ResampleFilter>,

    /// Color distance metric
    pub metric: Option<Metric>,

    /// Palette reduction strategy
    pub strategy: Option<Strategy>,

    /// Directory with additional `<tag>.txt` language files
    pub languages_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Parse a config from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load configuration from a file, falling back to defaults on failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
