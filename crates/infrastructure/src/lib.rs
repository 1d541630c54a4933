//! Infrastructure layer - Adapters between the engine and its runtime
//!
//! Implements the application layer's policy port: string-typed option
//! loading with validation, hot-reloadable policy snapshots, and logging
//! setup.

pub mod config;
pub mod policy_reload;
pub mod telemetry;

pub use config::{ConfigError, FaultOptions};
pub use policy_reload::{ReloadablePolicy, spawn_reload_handler};
pub use telemetry::init_logging;
