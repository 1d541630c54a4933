//! Application services

mod fault_engine;
mod host_matcher;
mod injection_stats;

pub use fault_engine::FaultEngine;
pub use host_matcher::HostMatcher;
pub use injection_stats::{InjectionStats, StatsSnapshot};
