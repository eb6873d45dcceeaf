//! Configuration error types.

use thiserror::Error;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("history.limit must be greater than zero")]
    ZeroHistoryLimit,

    #[error("logging.filter must not be empty")]
    EmptyLogFilter,

    #[error("logging.filter '{filter}' is not a valid filter: {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("host.prompt must not be empty")]
    EmptyPrompt,
}

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Every violation found, not just the first
    #[error("Invalid configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
