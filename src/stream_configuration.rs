//! Configuration types for plusar environments

use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings applied to every source stream an `Environment` creates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Label used in log lines emitted by sources.
    pub name: String,
    /// Log every pull of a source at `trace` level.
    pub trace_pulls: bool,
    /// Upper bound on the elements any single source yields.
    pub max_pulls_per_source: Option<usize>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            name: "plusar".to_string(),
            trace_pulls: false,
            max_pulls_per_source: None,
        }
    }
}

impl EnvironmentConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the environment name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable or disable pull tracing
    pub fn trace_pulls(mut self, enabled: bool) -> Self {
        self.trace_pulls = enabled;
        self
    }

    /// Cap the number of elements each source yields
    pub fn max_pulls_per_source(mut self, limit: usize) -> Self {
        self.max_pulls_per_source = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Parse a JSON document and validate the result. Missing fields take
    /// their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EnvironmentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
