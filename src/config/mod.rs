//! Host configuration.
//!
//! Loaded from TOML; every field has a default so an empty file (or no file)
//! is a valid configuration. Validation uses Stillwater's `Validation` so a
//! bad file reports all of its problems at once.
//!
//! # Example
//!
//! ```rust
//! use chaincalc::config::CalculatorConfig;
//!
//! let config = CalculatorConfig::from_toml_str(r#"
//!     [history]
//!     limit = 20
//!
//!     [logging]
//!     filter = "chaincalc=debug"
//! "#).unwrap();
//!
//! assert_eq!(config.history.limit, Some(20));
//! assert_eq!(config.host.prompt, "> ");
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing_subscriber::EnvFilter;

pub mod error;

pub use error::{ConfigError, ConfigViolation};

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
    pub host: HostConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
    /// Most records kept; unbounded when absent
    pub limit: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    pub prompt: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.into_valid()
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Run every check, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks: Vec<Check> = vec![
            self.check_history_limit(),
            self.check_log_filter(),
            self.check_prompt(),
        ];
        Validation::all_vec(checks).map(|_| ())
    }

    fn into_valid(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    fn check_history_limit(&self) -> Check {
        match self.history.limit {
            Some(0) => Validation::fail(ConfigViolation::ZeroHistoryLimit),
            _ => Validation::success(()),
        }
    }

    fn check_log_filter(&self) -> Check {
        let filter = self.logging.filter.trim();
        if filter.is_empty() {
            return Validation::fail(ConfigViolation::EmptyLogFilter);
        }
        match EnvFilter::try_new(filter) {
            Ok(_) => Validation::success(()),
            Err(e) => Validation::fail(ConfigViolation::InvalidLogFilter {
                filter: filter.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn check_prompt(&self) -> Check {
        if self.host.prompt.is_empty() {
            Validation::fail(ConfigViolation::EmptyPrompt)
        } else {
            Validation::success(())
        }
    }
}
