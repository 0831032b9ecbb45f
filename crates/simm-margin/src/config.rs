//! Configuration for sensitivity weighting.

use serde::{Deserialize, Serialize};

use crate::error::{MarginError, MarginResult};

/// Configuration for the weighting engine.
///
/// Controls how a batch is executed. It never changes the numbers produced:
/// sequential and parallel runs yield identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightingConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum batch size to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 1000,
        }
    }
}

impl WeightingConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Parses and validates a config from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> MarginResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| MarginError::invalid_config("json", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the config for values the engine cannot run with.
    pub fn validate(&self) -> MarginResult<()> {
        if self.parallel_threshold == 0 {
            return Err(MarginError::invalid_config(
                "parallel_threshold",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = WeightingConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sequential() {
        let config = WeightingConfig::sequential();
        assert!(!config.parallel);
        assert!(!config.should_parallelize(1_000_000));
    }

    #[test]
    fn test_builder_pattern() {
        let config = WeightingConfig::new()
            .with_parallel(false)
            .with_threshold(50);

        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, 50);
    }

    #[test]
    fn test_should_parallelize() {
        let config = WeightingConfig::new().with_threshold(100);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(50));
            assert!(config.should_parallelize(100));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(50));
            assert!(!config.should_parallelize(100));
        }
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = WeightingConfig::new().with_threshold(0).validate().unwrap_err();
        assert!(matches!(err, MarginError::InvalidConfig { ref field, .. } if field == "parallel_threshold"));
    }

    #[test]
    fn test_from_json() {
        let config = WeightingConfig::from_json(r#"{"parallel_threshold": 250}"#).unwrap();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 250);

        assert!(WeightingConfig::from_json(r#"{"parallel_threshold": 0}"#).is_err());
        assert!(WeightingConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_serde() {
        let config = WeightingConfig::sequential().with_threshold(75);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: WeightingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
