//! Engine configuration and its builder.

use serde::{Deserialize, Serialize};

use crate::geo::GeoBounds;

pub use error::ConfigError;

/// Batch size above which enrichment runs on the rayon pool.
const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Configuration for a [`crate::TaxonomyEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Region used to validate and repair coordinates.
    pub region: GeoBounds,
    /// Root category fixed by the hosting page, if any.
    pub locked_root: Option<String>,
    /// Fall back to free-text detection when structured fields do not match.
    pub text_fallback: bool,
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            region: GeoBounds::YEMEN,
            locked_root: None,
            text_fallback: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values that do not depend on a registry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.region.is_valid_region() {
            return Err(ConfigError::InvalidRegion(self.region));
        }
        if self.locked_root.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::EmptyLockedRoot);
        }
        Ok(())
    }
}

/// Builder for creating engine configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Create a new builder targeting Yemen
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`EngineConfigBuilder::new`]
    pub fn yemen() -> Self {
        Self::new()
    }

    /// Accept any valid position as-is; swapped pairs are only repaired when
    /// the as-is reading is impossible
    pub fn worldwide() -> Self {
        let mut builder = Self::new();
        builder.config.region = GeoBounds::GLOBAL;
        builder
    }

    /// Lock the filter to one root category
    pub fn locked_root(mut self, root: impl Into<String>) -> Self {
        self.config.locked_root = Some(root.into());
        self
    }

    /// Use a custom target region
    pub fn region(mut self, region: GeoBounds) -> Result<Self, ConfigError> {
        if !region.is_valid_region() {
            return Err(ConfigError::InvalidRegion(region));
        }
        self.config.region = region;
        Ok(self)
    }

    /// Enable or disable free-text detection
    pub fn text_fallback(mut self, enabled: bool) -> Self {
        self.config.text_fallback = enabled;
        self
    }

    /// Set the batch size above which enrichment runs in parallel
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> EngineConfig {
        self.config
    }
}

mod error {
    use thiserror::Error;

    use crate::geo::GeoBounds;

    #[derive(Error, Debug)]
    pub enum ConfigError {
        #[error("Invalid target region: {0:?}")]
        InvalidRegion(GeoBounds),
        #[error("Locked root must not be empty")]
        EmptyLockedRoot,
        #[error("Locked root '{0}' is not a known root category")]
        UnknownLockedRoot(String),
        #[error("Invalid configuration JSON: {0}")]
        Json(#[from] serde_json::Error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfigBuilder::new().build();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.region, GeoBounds::YEMEN);
        assert!(config.locked_root.is_none());
        assert!(config.text_fallback);
    }

    #[test]
    fn test_presets() {
        assert_eq!(EngineConfigBuilder::yemen().build().region, GeoBounds::YEMEN);
        assert_eq!(
            EngineConfigBuilder::worldwide().build().region,
            GeoBounds::GLOBAL
        );
    }

    #[test]
    fn test_builder_chaining() {
        let config = EngineConfigBuilder::new()
            .locked_root("cars")
            .text_fallback(false)
            .parallel_threshold(10)
            .build();
        assert_eq!(config.locked_root.as_deref(), Some("cars"));
        assert!(!config.text_fallback);
        assert_eq!(config.parallel_threshold, 10);
    }

    #[test]
    fn test_region_validation() {
        let region = GeoBounds::new(12.5, 42.0, 13.5, 46.0);
        let config = EngineConfigBuilder::new().region(region).unwrap().build();
        assert_eq!(config.region, region);

        let inverted = GeoBounds::new(13.5, 42.0, 12.5, 46.0);
        assert!(matches!(
            EngineConfigBuilder::new().region(inverted),
            Err(ConfigError::InvalidRegion(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let config = EngineConfig::from_json(r#"{"lockedRoot": "realestate"}"#).unwrap();
        assert_eq!(config.locked_root.as_deref(), Some("realestate"));
        assert_eq!(config.region, GeoBounds::YEMEN);

        let config = EngineConfig::from_json(
            r#"{"region": {"south": -90, "west": -180, "north": 90, "east": 180}, "textFallback": false}"#,
        )
        .unwrap();
        assert_eq!(config.region, GeoBounds::GLOBAL);
        assert!(!config.text_fallback);

        assert!(matches!(
            EngineConfig::from_json(r#"{"lockedRoot": ""}"#),
            Err(ConfigError::EmptyLockedRoot)
        ));
        assert!(matches!(
            EngineConfig::from_json("{"),
            Err(ConfigError::Json(_))
        ));
    }
}
