//! Fault-injection decision engine
//!
//! Invoked once per intercepted request by the interception host. Decides
//! whether the request passes through, receives a synthetic failure
//! response, or has its connection aborted. The engine performs no I/O and
//! never blocks; its only cross-request state is an atomic request counter
//! and diagnostic statistics, so it can be shared across request tasks.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use rand::Rng;
use tracing::{debug, info, warn};

use domain::{Decision, FaultPolicy};

use crate::error::ApplicationError;
use crate::ports::PolicyProvider;
use crate::services::{HostMatcher, InjectionStats, StatsSnapshot};

/// Host matcher compiled for one specific policy snapshot
///
/// Rebuilt lazily when the provider hands out a different snapshot, so the
/// hot path pays one pointer comparison instead of an automaton build.
#[derive(Debug)]
struct CompiledMatcher {
    policy: Arc<FaultPolicy>,
    matcher: HostMatcher,
}

/// The fault-injection decision engine
pub struct FaultEngine {
    provider: Arc<dyn PolicyProvider>,
    compiled: RwLock<CompiledMatcher>,
    request_count: AtomicU64,
    stats: InjectionStats,
}

impl std::fmt::Debug for FaultEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaultEngine")
            .field("request_count", &self.request_count)
            .finish_non_exhaustive()
    }
}

impl FaultEngine {
    /// Create an engine reading policy snapshots from the given provider
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::MatcherBuild` if the initial policy's
    /// host patterns cannot be compiled.
    pub fn new(provider: Arc<dyn PolicyProvider>) -> Result<Self, ApplicationError> {
        let policy = provider.current();
        let matcher = HostMatcher::new(policy.matched_hosts())?;
        Ok(Self {
            provider,
            compiled: RwLock::new(CompiledMatcher { policy, matcher }),
            request_count: AtomicU64::new(0),
            stats: InjectionStats::new(),
        })
    }

    /// Decide the fate of one intercepted request
    ///
    /// Reads the current policy snapshot fresh, so a hot-reloaded
    /// configuration takes effect on the very next request. Infallible:
    /// every host string maps to a valid decision.
    pub fn decide(&self, host: &str) -> Decision {
        let policy = self.provider.current();
        if !self.host_is_matched(&policy, host) {
            return Decision::PassThrough;
        }

        let request = self.request_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.stats.record_matched();

        let mut rng = rand::rng();
        if rng.random::<f64>() >= policy.failure_rate().value() {
            debug!(request, host, "allowing request");
            self.stats.record_passed();
            return Decision::PassThrough;
        }

        // Uniform choice from the pool; duplicate kinds bias the draw
        // proportionally, as configured.
        let kinds = policy.failure_kinds();
        let kind = kinds[rng.random_range(0..kinds.len())];
        let decision = Decision::from(kind);
        info!(request, host, kind = %kind, "injecting failure");
        self.stats.record_injected(kind);
        decision
    }

    /// Total matched requests seen so far (diagnostics only)
    #[must_use]
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Copy of the current injection statistics
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Check eligibility against the matcher compiled for this snapshot,
    /// recompiling if the provider swapped policies since the last request
    fn host_is_matched(&self, policy: &Arc<FaultPolicy>, host: &str) -> bool {
        {
            let compiled = self.compiled.read();
            if Arc::ptr_eq(&compiled.policy, policy) {
                return compiled.matcher.is_match(host);
            }
        }

        let mut compiled = self.compiled.write();
        if !Arc::ptr_eq(&compiled.policy, policy) {
            match HostMatcher::new(policy.matched_hosts()) {
                Ok(matcher) => {
                    *compiled = CompiledMatcher {
                        policy: Arc::clone(policy),
                        matcher,
                    };
                },
                Err(error) => {
                    // Keep serving with the previous automaton; the swapped
                    // rate and kind pool still apply.
                    warn!(%error, "host matcher rebuild failed, keeping previous patterns");
                },
            }
        }
        compiled.matcher.is_match(host)
    }
}
