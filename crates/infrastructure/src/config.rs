//! Engine option loading
//!
//! The interception host hands options over as strings (`failure_rate` is
//! a string-encoded float, `failure_types` a comma-separated list). They
//! are parsed and validated here, once, at load or reload time; a policy
//! that reaches the engine can no longer be invalid. Bad values fail
//! loudly instead of silently defaulting to a 0% or 100% rate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use domain::policy::DEFAULT_MATCHED_HOSTS;
use domain::value_objects::{FailureKind, FailureRate};
use domain::{DomainError, FaultPolicy};

/// Errors raised while loading or validating options
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Options could not be read from file or environment
    #[error("Failed to load options: {0}")]
    Load(#[from] config::ConfigError),

    /// Options were read but do not form a valid policy
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Raw, string-typed options as the host supplies them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultOptions {
    /// Probability of injecting a failure, "0.0" to "1.0"
    #[serde(default = "default_failure_rate")]
    pub failure_rate: String,

    /// Comma-separated failure kinds to inject
    #[serde(default = "default_failure_types")]
    pub failure_types: String,

    /// Host-name substrings eligible for injection
    #[serde(default = "default_matched_hosts")]
    pub matched_hosts: Vec<String>,
}

fn default_failure_rate() -> String {
    "0.3".to_string()
}

fn default_failure_types() -> String {
    FailureKind::ALL
        .iter()
        .map(FailureKind::wire_name)
        .collect::<Vec<_>>()
        .join(",")
}

fn default_matched_hosts() -> Vec<String> {
    DEFAULT_MATCHED_HOSTS
        .iter()
        .map(|h| (*h).to_string())
        .collect()
}

impl Default for FaultOptions {
    fn default() -> Self {
        Self {
            failure_rate: default_failure_rate(),
            failure_types: default_failure_types(),
            matched_hosts: default_matched_hosts(),
        }
    }
}

impl FaultOptions {
    /// Load options from an optional `flakysim` file and `FLAKYSIM_*`
    /// environment variables, on top of the built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .set_default("failure_rate", default_failure_rate())?
            .set_default("failure_types", default_failure_types())?
            .set_default("matched_hosts", default_matched_hosts())?
            // Load from file if exists
            .add_source(config::File::with_name("flakysim").required(false))
            // Override with environment variables (e.g., FLAKYSIM_FAILURE_RATE)
            .add_source(
                config::Environment::with_prefix("FLAKYSIM")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("matched_hosts"),
            );

        let loaded = builder.build()?;
        Ok(loaded.try_deserialize()?)
    }

    /// Parse and validate into an immutable policy snapshot
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for an unparseable or out-of-range
    /// rate, an unknown or empty kind list, or a blank host pattern.
    pub fn try_into_policy(&self) -> Result<FaultPolicy, ConfigError> {
        let rate: FailureRate = self.failure_rate.parse()?;

        let kinds = if self.failure_types.trim().is_empty() {
            Vec::new()
        } else {
            self.failure_types
                .split(',')
                .map(|entry| entry.trim().parse::<FailureKind>())
                .collect::<Result<Vec<_>, _>>()?
        };

        let policy = FaultPolicy::new(rate, kinds, self.matched_hosts.clone())?;
        Ok(policy)
    }

    /// Load and validate in one step
    pub fn load_policy() -> Result<FaultPolicy, ConfigError> {
        Self::load()?.try_into_policy()
    }
}
