//! Failure kind value object
//!
//! The closed vocabulary of failure modes that can be injected into an
//! intercepted request. Each response-bearing kind carries a fixed
//! synthetic response template; `NetworkError` carries none and signals
//! connection abort instead.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::FailureKind;
//!
//! let kind: FailureKind = "rate_limit".parse().expect("known kind");
//! assert_eq!(kind, FailureKind::RateLimit);
//! assert_eq!(kind.status(), Some(429));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A simulated upstream failure mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// HTTP 429 with a rate-limit error body
    RateLimit,
    /// HTTP 500 with a generic server error body
    ServerError,
    /// Connection dropped without any HTTP response
    NetworkError,
    /// HTTP 401 with an authentication error body
    AuthError,
    /// HTTP 400 with an invalid-request error body
    InvalidRequest,
}

impl FailureKind {
    /// All known failure kinds, in wire-name order
    pub const ALL: &'static [Self] = &[
        Self::RateLimit,
        Self::ServerError,
        Self::NetworkError,
        Self::AuthError,
        Self::InvalidRequest,
    ];

    /// The wire name used in configuration option strings
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::RateLimit => "rate_limit",
            Self::ServerError => "server_error",
            Self::NetworkError => "network_error",
            Self::AuthError => "auth_error",
            Self::InvalidRequest => "invalid_request",
        }
    }

    /// HTTP status code of the synthetic response
    ///
    /// `None` for `NetworkError`, which terminates the connection instead
    /// of answering.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimit => Some(429),
            Self::ServerError => Some(500),
            Self::AuthError => Some(401),
            Self::InvalidRequest => Some(400),
            Self::NetworkError => None,
        }
    }

    /// Exact JSON error body of the synthetic response
    ///
    /// `None` for `NetworkError`.
    #[must_use]
    pub const fn body(&self) -> Option<&'static str> {
        match self {
            Self::RateLimit => {
                Some(r#"{"error": {"message": "Rate limit exceeded", "type": "rate_limit_error"}}"#)
            },
            Self::ServerError => Some(r#"{"error": {"message": "Internal server error"}}"#),
            Self::AuthError => {
                Some(r#"{"error": {"message": "Invalid API key", "type": "authentication_error"}}"#)
            },
            Self::InvalidRequest => Some(
                r#"{"error": {"message": "Invalid request: missing required parameter", "type": "invalid_request_error"}}"#,
            ),
            Self::NetworkError => None,
        }
    }

    /// Whether this kind aborts the connection instead of responding
    #[must_use]
    pub const fn is_abort(&self) -> bool {
        matches!(self, Self::NetworkError)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FailureKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rate_limit" => Ok(Self::RateLimit),
            "server_error" => Ok(Self::ServerError),
            "network_error" => Ok(Self::NetworkError),
            "auth_error" => Ok(Self::AuthError),
            "invalid_request" => Ok(Self::InvalidRequest),
            other => Err(DomainError::UnknownFailureKind(other.to_string())),
        }
    }
}
