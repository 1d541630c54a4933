//! Application layer - The fault-injection decision engine
//!
//! Contains the engine that decides the fate of each intercepted request,
//! and the port definitions through which the interception host supplies
//! configuration and applies decisions.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
