//! Fault policy snapshot
//!
//! An immutable, validated snapshot of the engine's configuration. The
//! interception host may swap in a new snapshot at runtime; a snapshot is
//! never mutated field by field, so concurrent readers always observe a
//! consistent combination of rate, kinds, and host patterns.

use crate::errors::DomainError;
use crate::value_objects::{FailureKind, FailureRate};

/// Host-name substrings matched by default: the LLM API domains the
/// simulator was built to sit in front of.
pub const DEFAULT_MATCHED_HOSTS: &[&str] = &["together.xyz", "anthropic.com", "openrouter.ai"];

/// Validated fault-injection configuration
///
/// Duplicate entries in the kind pool are legal and bias random selection
/// proportionally; the pool is deliberately not deduplicated so operators
/// can weight kinds by repetition.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultPolicy {
    failure_rate: FailureRate,
    failure_kinds: Vec<FailureKind>,
    matched_hosts: Vec<String>,
}

impl FaultPolicy {
    /// Create a validated policy
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NoFailureKinds` if the kind pool is empty, or
    /// `DomainError::EmptyHostPattern` if any host pattern is blank.
    pub fn new(
        failure_rate: FailureRate,
        failure_kinds: Vec<FailureKind>,
        matched_hosts: Vec<String>,
    ) -> Result<Self, DomainError> {
        if failure_kinds.is_empty() {
            return Err(DomainError::NoFailureKinds);
        }
        if matched_hosts.iter().any(|h| h.trim().is_empty()) {
            return Err(DomainError::EmptyHostPattern);
        }
        Ok(Self {
            failure_rate,
            failure_kinds,
            matched_hosts,
        })
    }

    /// A policy that always injects the given kind on the default hosts
    ///
    /// Useful in tests and for reproducing a specific failure mode.
    #[must_use]
    pub fn always(kind: FailureKind) -> Self {
        Self {
            failure_rate: FailureRate::ALWAYS,
            failure_kinds: vec![kind],
            matched_hosts: default_hosts(),
        }
    }

    /// A policy that never injects
    #[must_use]
    pub fn never() -> Self {
        Self {
            failure_rate: FailureRate::NEVER,
            failure_kinds: FailureKind::ALL.to_vec(),
            matched_hosts: default_hosts(),
        }
    }

    /// The injection probability
    #[must_use]
    pub const fn failure_rate(&self) -> FailureRate {
        self.failure_rate
    }

    /// The pool of failure kinds eligible for random selection
    #[must_use]
    pub fn failure_kinds(&self) -> &[FailureKind] {
        &self.failure_kinds
    }

    /// Host-name substrings marking a request as eligible for injection
    #[must_use]
    pub fn matched_hosts(&self) -> &[String] {
        &self.matched_hosts
    }
}

impl Default for FaultPolicy {
    /// 30% rate, all five kinds, the known LLM API domains.
    fn default() -> Self {
        Self {
            failure_rate: FailureRate::new(0.3).unwrap_or(FailureRate::NEVER),
            failure_kinds: FailureKind::ALL.to_vec(),
            matched_hosts: default_hosts(),
        }
    }
}

fn default_hosts() -> Vec<String> {
    DEFAULT_MATCHED_HOSTS
        .iter()
        .map(|h| (*h).to_string())
        .collect()
}
