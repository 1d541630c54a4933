//! Domain layer for flakysim
//!
//! Contains the fault vocabulary, validated configuration snapshots, and
//! domain errors. This layer has no external dependencies and defines the
//! ubiquitous language.

pub mod decision;
pub mod errors;
pub mod policy;
pub mod value_objects;

pub use decision::{Decision, FaultResponse};
pub use errors::DomainError;
pub use policy::FaultPolicy;
pub use value_objects::*;
