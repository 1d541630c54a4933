//! Port definitions for the application layer
//!
//! Ports are the interfaces between the decision engine and the
//! interception host: one inbound (configuration snapshots) and one
//! outbound (applying decisions to an in-flight request).

mod flow_actions;
mod policy_provider;

pub use flow_actions::{FlowActions, apply_decision};
pub use policy_provider::{FixedPolicyProvider, PolicyProvider};
