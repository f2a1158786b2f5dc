//! # Scenario Configuration
//!
//! Loaded once at startup from `config/scenario.toml`, which is embedded in
//! the binary. No environment variable or command-line flag is consulted.

use serde::Deserialize;
use vectra_core::{Coords, VectorError, VectorResult};

/// The shipped configuration file.
pub const EMBEDDED_CONFIG: &str = include_str!("../config/scenario.toml");

/// Default stderr log filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default first vector for both scenarios.
pub const DEFAULT_ORIGIN: Coords = Coords::new(1.0, 2.0, 3.0);

/// Settings for one demonstration scenario.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VariantConfig {
    /// Components of the first vector the scenario constructs, as `[x, y, z]`.
    pub origin: Coords,
}

impl VariantConfig {
    /// The origin as a coordinate buffer.
    #[must_use]
    pub const fn origin_coords(&self) -> Coords {
        self.origin
    }
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN,
        }
    }
}

/// Top-level configuration for both binaries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// `tracing-subscriber` filter directive for stderr logging.
    pub log_filter: String,
    /// Settings for `exclusive_demo`.
    pub exclusive: VariantConfig,
    /// Settings for `shared_demo`.
    pub shared: VariantConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            exclusive: VariantConfig::default(),
            shared: VariantConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Parses a configuration from TOML text.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidConfig`] if the text is not valid TOML or
    /// contains unknown or mistyped fields.
    pub fn from_toml_str(text: &str) -> VectorResult<Self> {
        toml::from_str(text).map_err(|e| VectorError::InvalidConfig(e.to_string()))
    }

    /// Parses the configuration embedded at compile time.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_toml_str`].
    pub fn embedded() -> VectorResult<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_matches_default() {
        let config = ScenarioConfig::embedded().unwrap();
        assert_eq!(config, ScenarioConfig::default());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = ScenarioConfig::from_toml_str("[shared]\norigin = [3.0, 0.0, 4.0]\n").unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.exclusive.origin, DEFAULT_ORIGIN);
        assert_eq!(config.shared.origin_coords(), Coords::new(3.0, 0.0, 4.0));

        let empty = ScenarioConfig::from_toml_str("").unwrap();
        assert_eq!(empty, ScenarioConfig::default());
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let result = ScenarioConfig::from_toml_str("log_filter = ");
        assert!(matches!(result, Err(VectorError::InvalidConfig(_))));
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let result = ScenarioConfig::from_toml_str("[exclusive]\norigin = [1.0, 2.0]\n");
        assert!(matches!(result, Err(VectorError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = ScenarioConfig::from_toml_str("threads = 4\n");
        assert!(matches!(result, Err(VectorError::InvalidConfig(_))));
    }
}
