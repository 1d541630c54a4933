//! Policy provider port - Interface for configuration snapshots

use std::sync::Arc;

use domain::FaultPolicy;

/// Port through which the engine reads its configuration
///
/// The engine calls `current` once per intercepted request, so providers
/// must return quickly and without blocking. Hot reload is modeled as the
/// provider handing out a different snapshot on the next call, never as
/// in-place mutation; every snapshot is internally consistent.
pub trait PolicyProvider: Send + Sync {
    /// The policy in effect right now
    fn current(&self) -> Arc<FaultPolicy>;
}

/// A provider that always returns the same policy
///
/// The simplest deployment: load once at startup, no hot reload.
#[derive(Debug, Clone)]
pub struct FixedPolicyProvider {
    policy: Arc<FaultPolicy>,
}

impl FixedPolicyProvider {
    /// Wrap a policy into a fixed provider
    #[must_use]
    pub fn new(policy: FaultPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }
}

impl PolicyProvider for FixedPolicyProvider {
    fn current(&self) -> Arc<FaultPolicy> {
        Arc::clone(&self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::FailureKind;

    #[test]
    fn fixed_provider_returns_same_snapshot() {
        let provider = FixedPolicyProvider::new(FaultPolicy::always(FailureKind::RateLimit));
        let first = provider.current();
        let second = provider.current();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
