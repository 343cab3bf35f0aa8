// Validator configuration

use crate::errors::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding [`ValidatorConfig::delimiter`].
pub const DELIMITER_ENV: &str = "FIELDCHECK_ERROR_DELIMITER";

/// Environment variable overriding [`ValidatorConfig::log_failures`].
pub const LOG_FAILURES_ENV: &str = "FIELDCHECK_LOG_FAILURES";

/// Settings for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Separator placed between failures when they are rendered
    pub delimiter: String,

    /// Emit a debug event for every recorded failure
    pub log_failures: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            log_failures: true,
        }
    }
}

impl ValidatorConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let delimiter = env::var(DELIMITER_ENV).unwrap_or(defaults.delimiter);

        let log_failures = env::var(LOG_FAILURES_ENV)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.log_failures);

        Self {
            delimiter,
            log_failures,
        }
    }

    /// Set the failure delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Enable or disable per-failure debug events
    pub fn with_log_failures(mut self, enabled: bool) -> Self {
        self.log_failures = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.delimiter, " >>= ");
        assert!(config.log_failures);
    }

    #[test]
    fn test_builder() {
        let config = ValidatorConfig::default()
            .with_delimiter(" | ")
            .with_log_failures(false);
        assert_eq!(config.delimiter, " | ");
        assert!(!config.log_failures);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ValidatorConfig = serde_json::from_str(r#"{ "delimiter": "\n" }"#).unwrap();
        assert_eq!(config.delimiter, "\n");
        assert!(config.log_failures);
    }

    // Single test so the environment is never mutated concurrently
    #[test]
    fn test_from_env() {
        unsafe {
            env::remove_var(DELIMITER_ENV);
            env::remove_var(LOG_FAILURES_ENV);
        }
        assert_eq!(ValidatorConfig::from_env(), ValidatorConfig::default());

        unsafe {
            env::set_var(DELIMITER_ENV, "; ");
            env::set_var(LOG_FAILURES_ENV, "0");
        }
        let config = ValidatorConfig::from_env();
        assert_eq!(config.delimiter, "; ");
        assert!(!config.log_failures);
        assert_eq!(crate::Validator::from_env().config(), &config);

        for (raw, expected) in [
            ("1", true),
            ("true", true),
            ("TRUE", true),
            ("yes", false),
            ("", false),
        ] {
            unsafe {
                env::set_var(LOG_FAILURES_ENV, raw);
            }
            assert_eq!(ValidatorConfig::from_env().log_failures, expected, "{raw:?}");
        }

        unsafe {
            env::remove_var(DELIMITER_ENV);
            env::remove_var(LOG_FAILURES_ENV);
        }
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(ValidatorConfig::default()).unwrap();
        assert_eq!(json["delimiter"], " >>= ");
        assert_eq!(json["log_failures"], true);
    }
}
