//! Validator configuration, loadable from JSON.
use crate::validation::rules::DEFAULT_SIBLING_LIMIT;
use crate::validation::UserStory;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Knobs for a validation pass.
///
/// ```json
/// { "as_of": "2024-05-01T00:00:00", "sibling_limit": 15, "parallel": true, "disabled": ["US20"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Reference moment for "presently married". `None` means the local clock
    /// when the validator is built.
    pub as_of: Option<NaiveDateTime>,
    /// US15 flags families with at least this many children.
    pub sibling_limit: usize,
    /// Run rules on rayon's global pool.
    pub parallel: bool,
    /// Stories `Validator::run_all` skips.
    pub disabled: BTreeSet<UserStory>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            as_of: None,
            sibling_limit: DEFAULT_SIBLING_LIMIT,
            parallel: false,
            disabled: BTreeSet::new(),
        }
    }
}

impl ValidatorConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sibling_limit == 0 {
            return Err(ConfigError::Invalid("sibling_limit must be at least 1".into()));
        }
        Ok(())
    }
}
