//! Per-request decisions
//!
//! The result of evaluating one intercepted request. A decision is pure
//! data: the interception host applies it (forward, short-circuit with a
//! synthetic response, or kill the connection). Keeping the effect out of
//! the engine lets the decision logic be tested without a network stack.

use std::fmt;

use crate::value_objects::FailureKind;

/// A synthetic HTTP response to substitute for the real upstream's
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultResponse {
    /// HTTP status code
    pub status: u16,
    /// Content-Type header value
    pub content_type: &'static str,
    /// Response body, a fixed JSON literal
    pub body: &'static str,
}

/// The fate of one intercepted request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Forward the request to the real upstream unmodified
    PassThrough,
    /// Short-circuit with a synthetic failure response
    Respond(FaultResponse),
    /// Terminate the connection without any HTTP response
    Abort,
}

impl Decision {
    /// Whether the request proceeds to the real upstream
    #[must_use]
    pub const fn is_pass_through(&self) -> bool {
        matches!(self, Self::PassThrough)
    }

    /// Whether the request was injected with a failure (response or abort)
    #[must_use]
    pub const fn is_injected(&self) -> bool {
        !self.is_pass_through()
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PassThrough => f.write_str("pass_through"),
            Self::Respond(response) => write!(f, "respond({})", response.status),
            Self::Abort => f.write_str("abort"),
        }
    }
}

impl From<FailureKind> for Decision {
    /// Materialize a failure kind into the decision the host must apply
    ///
    /// Exhaustive over the kind vocabulary: a response-bearing kind always
    /// yields `Respond`, `NetworkError` always yields `Abort`, and no kind
    /// ever yields both.
    fn from(kind: FailureKind) -> Self {
        match (kind.status(), kind.body()) {
            (Some(status), Some(body)) => Self::Respond(FaultResponse {
                status,
                content_type: "application/json",
                body,
            }),
            _ => Self::Abort,
        }
    }
}
