//! Hot-reloadable policy support
//!
//! Wraps the active `FaultPolicy` in an atomically swapped snapshot so the
//! host can reconfigure injection at runtime (SIGHUP or a direct call)
//! without restarting, and without readers ever observing a half-updated
//! policy.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::watch;
use tracing::{error, info, warn};

use application::PolicyProvider;
use domain::FaultPolicy;

use crate::config::FaultOptions;

/// A `FaultPolicy` holder that supports atomic replacement
///
/// Implements `PolicyProvider`, so the engine picks up a swapped policy on
/// its very next request.
#[derive(Debug, Clone)]
pub struct ReloadablePolicy {
    inner: Arc<ArcSwap<FaultPolicy>>,
    /// Notifier for policy change events
    notify: watch::Sender<u64>,
    /// Receiver for policy change events
    receiver: watch::Receiver<u64>,
}

impl ReloadablePolicy {
    /// Create a new reloadable policy
    #[must_use]
    pub fn new(policy: FaultPolicy) -> Self {
        let (notify, receiver) = watch::channel(0);
        Self {
            inner: Arc::new(ArcSwap::new(Arc::new(policy))),
            notify,
            receiver,
        }
    }

    /// Get the current policy snapshot
    #[must_use]
    pub fn load(&self) -> Arc<FaultPolicy> {
        self.inner.load_full()
    }

    /// Replace the policy with a new validated snapshot
    ///
    /// For hosts that manage options themselves and push updates directly.
    pub fn swap(&self, policy: FaultPolicy) {
        let old = self.inner.swap(Arc::new(policy));
        let new = self.inner.load();
        info!(
            old_rate = %old.failure_rate(),
            new_rate = %new.failure_rate(),
            "Policy swapped"
        );
        self.notify_changed();
    }

    /// Reload options from file/environment and swap them in
    ///
    /// Returns `true` if the reload was successful; on failure the
    /// previous policy stays in effect.
    pub fn reload(&self) -> bool {
        match FaultOptions::load_policy() {
            Ok(new_policy) => {
                let old = self.inner.swap(Arc::new(new_policy));
                let new = self.inner.load();
                info!(
                    old_rate = %old.failure_rate(),
                    new_rate = %new.failure_rate(),
                    "Policy reloaded successfully"
                );
                self.notify_changed();
                true
            },
            Err(e) => {
                error!("Failed to reload policy: {e}");
                false
            },
        }
    }

    /// Subscribe to policy change notifications
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.receiver.clone()
    }

    fn notify_changed(&self) {
        let version = *self.notify.borrow() + 1;
        if self.notify.send(version).is_err() {
            warn!("No policy change receivers active");
        }
    }
}

impl PolicyProvider for ReloadablePolicy {
    fn current(&self) -> Arc<FaultPolicy> {
        self.inner.load_full()
    }
}

/// Spawn a background task that listens for SIGHUP and reloads the policy
///
/// Returns the handle so the caller can also trigger reloads manually.
#[cfg(unix)]
pub fn spawn_reload_handler(policy: ReloadablePolicy) -> ReloadablePolicy {
    use tokio::signal::unix::{SignalKind, signal};

    let policy_clone = policy.clone();
    tokio::spawn(async move {
        let mut sighup = match signal(SignalKind::hangup()) {
            Ok(s) => s,
            Err(e) => {
                error!("Failed to install SIGHUP handler: {e}");
                return;
            },
        };

        loop {
            sighup.recv().await;
            info!("Received SIGHUP, reloading policy...");
            if policy_clone.reload() {
                info!("Policy reload complete");
            } else {
                warn!("Policy reload failed, keeping previous policy");
            }
        }
    });

    policy
}

/// No-op on non-Unix systems
#[cfg(not(unix))]
pub fn spawn_reload_handler(policy: ReloadablePolicy) -> ReloadablePolicy {
    warn!("SIGHUP policy reload not supported on this platform");
    policy
}
