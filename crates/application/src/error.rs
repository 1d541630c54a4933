//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// All variants surface at construction or configuration-swap time; the
/// per-request decision path is infallible.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The host-pattern automaton could not be built
    #[error("Host matcher build failed: {0}")]
    MatcherBuild(String),
}
