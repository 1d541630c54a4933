//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
///
/// All of these are configuration-time errors: a policy that constructs
/// successfully can never fail while evaluating requests.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// Failure rate could not be parsed or is out of the [0, 1] range
    #[error("Invalid failure rate: {0}")]
    InvalidFailureRate(String),

    /// Failure kind name not in the known vocabulary
    #[error("Unknown failure kind: {0}")]
    UnknownFailureKind(String),

    /// A policy must carry at least one failure kind
    #[error("Failure kind list is empty; at least one kind is required")]
    NoFailureKinds,

    /// Host patterns must be non-blank substrings
    #[error("Matched-host pattern is empty or blank")]
    EmptyHostPattern,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_failure_rate_message() {
        let err = DomainError::InvalidFailureRate("1.5 is out of range".to_string());
        assert_eq!(err.to_string(), "Invalid failure rate: 1.5 is out of range");
    }

    #[test]
    fn unknown_failure_kind_message() {
        let err = DomainError::UnknownFailureKind("throttle".to_string());
        assert_eq!(err.to_string(), "Unknown failure kind: throttle");
    }

    #[test]
    fn no_failure_kinds_message() {
        assert_eq!(
            DomainError::NoFailureKinds.to_string(),
            "Failure kind list is empty; at least one kind is required"
        );
    }

    #[test]
    fn empty_host_pattern_message() {
        assert_eq!(
            DomainError::EmptyHostPattern.to_string(),
            "Matched-host pattern is empty or blank"
        );
    }
}
