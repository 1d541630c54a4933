//! Injection statistics
//!
//! Atomic counters the engine updates on every matched request. Counts are
//! diagnostics only; they never gate a decision and never block. Relaxed
//! ordering is sufficient because no other state is published through them.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use domain::FailureKind;

/// Running totals for one engine instance
#[derive(Debug, Default)]
pub struct InjectionStats {
    matched: AtomicU64,
    passed: AtomicU64,
    injected: AtomicU64,
    aborted: AtomicU64,
    per_kind: [AtomicU64; FailureKind::ALL.len()],
}

/// Point-in-time copy of the counters, suitable for serialization
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsSnapshot {
    /// Requests whose host matched the policy
    pub matched: u64,
    /// Matched requests allowed through to the real upstream
    pub passed: u64,
    /// Matched requests that received an injected failure
    pub injected: u64,
    /// Injected failures that aborted the connection
    pub aborted: u64,
    /// Injected failures per kind, in `FailureKind::ALL` order
    pub per_kind: [u64; FailureKind::ALL.len()],
}

impl StatsSnapshot {
    /// The injected fraction actually observed so far
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn observed_failure_rate(&self) -> f64 {
        if self.matched == 0 {
            0.0
        } else {
            self.injected as f64 / self.matched as f64
        }
    }
}

impl InjectionStats {
    /// Create zeroed statistics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a matched request
    pub fn record_matched(&self) {
        self.matched.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a matched request that was allowed through
    pub fn record_passed(&self) {
        self.passed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an injected failure of the given kind
    pub fn record_injected(&self, kind: FailureKind) {
        self.injected.fetch_add(1, Ordering::Relaxed);
        if kind.is_abort() {
            self.aborted.fetch_add(1, Ordering::Relaxed);
        }
        self.per_kind[kind_index(kind)].fetch_add(1, Ordering::Relaxed);
    }

    /// Copy the current counters
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            matched: self.matched.load(Ordering::Relaxed),
            passed: self.passed.load(Ordering::Relaxed),
            injected: self.injected.load(Ordering::Relaxed),
            aborted: self.aborted.load(Ordering::Relaxed),
            per_kind: core::array::from_fn(|i| self.per_kind[i].load(Ordering::Relaxed)),
        }
    }
}

const fn kind_index(kind: FailureKind) -> usize {
    match kind {
        FailureKind::RateLimit => 0,
        FailureKind::ServerError => 1,
        FailureKind::NetworkError => 2,
        FailureKind::AuthError => 3,
        FailureKind::InvalidRequest => 4,
    }
}
