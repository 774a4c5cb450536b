//! Subscription broker: synchronous change notification for store observers.

use crate::error::{RosterError, RosterResult};
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, error};

/// Zero-argument change callback
pub type Observer = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// How a panicking observer affects the rest of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObserverPolicy {
    /// Catch and log the panic, then keep notifying later observers
    #[default]
    Isolate,
    /// Let the panic reach the committing caller; later observers are skipped
    FailFast,
}

/// Result of one notification round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifyReport {
    pub delivered: usize,
    pub failed: usize,
}

/// Ordered list of observers
///
/// Registration order is notification order. The same callback may be registered
/// more than once and is then called once per registration.
pub struct SubscriptionBroker {
    observers: RwLock<Vec<(SubscriptionId, Observer)>>,
    next_id: AtomicU64,
    policy: ObserverPolicy,
}

impl SubscriptionBroker {
    pub fn new(policy: ObserverPolicy) -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            policy,
        }
    }

    pub fn subscribe<F>(&self, observer: F) -> RosterResult<SubscriptionId>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut observers = self
            .observers
            .write()
            .map_err(|_| RosterError::lock("Failed to acquire write lock on observers"))?;
        observers.push((id, Arc::new(observer)));
        debug!("Registered observer {:?} ({} total)", id, observers.len());
        Ok(id)
    }

    /// Remove a registration; `false` if it was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> RosterResult<bool> {
        let mut observers = self
            .observers
            .write()
            .map_err(|_| RosterError::lock("Failed to acquire write lock on observers"))?;
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        Ok(observers.len() < before)
    }

    pub fn len(&self) -> usize {
        self.observers.read().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every observer once, in registration order
    ///
    /// Works on a snapshot of the list and holds no lock while observers run, so
    /// an observer may subscribe, unsubscribe or commit another mutation. Such a
    /// nested commit runs its own full notification before this one continues.
    pub fn notify(&self) -> RosterResult<NotifyReport> {
        let snapshot: Vec<(SubscriptionId, Observer)> = self
            .observers
            .read()
            .map_err(|_| RosterError::lock("Failed to acquire read lock on observers"))?
            .clone();

        let mut report = NotifyReport::default();
        for (id, observer) in snapshot {
            match self.policy {
                ObserverPolicy::FailFast => {
                    observer();
                    report.delivered += 1;
                }
                ObserverPolicy::Isolate => {
                    if panic::catch_unwind(AssertUnwindSafe(|| observer())).is_ok() {
                        report.delivered += 1;
                    } else {
                        error!("Observer {:?} panicked during notification", id);
                        report.failed += 1;
                    }
                }
            }
        }

        debug!(
            "Notified {} observers ({} failed)",
            report.delivered, report.failed
        );
        Ok(report)
    }
}

impl Default for SubscriptionBroker {
    fn default() -> Self {
        Self::new(ObserverPolicy::default())
    }
}
