//! Analytics configuration file loading.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::AnalyticsConfig;

impl AnalyticsConfig {
    /// Load an analytics configuration from a YAML file.
    ///
    /// Missing fields take their defaults, so a partial document is fine;
    /// the merged result is validated before returning.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails
    /// validation.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: AnalyticsConfig = serde_yaml::from_str(&content)?;
        config
            .validate()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(config)
    }
}
