//! Value Objects - Immutable, identity-less domain primitives

mod failure_kind;
mod failure_rate;

pub use failure_kind::FailureKind;
pub use failure_rate::FailureRate;
