use crate::config::RosterConfig;
use crate::employees::{Employee, EmployeeId, EmployeePatch, NewEmployee};
use crate::error::RosterResult;
use crate::store::broker::{ObserverPolicy, SubscriptionId};
use crate::store::mutation::Mutation;
use crate::store::persistent::{CommitReport, PersistStatus, PersistentStore};
use crate::store::slot::{DurableSlot, FileSlot};
use std::sync::{Arc, Weak};

/// Shared handle to one employee store
///
/// Cheap to clone; clones address the same collection and observer list. This
/// is the surface views and the CLI depend on.
#[derive(Clone)]
pub struct EmployeeStore {
    inner: Arc<PersistentStore>,
}

impl EmployeeStore {
    /// Store persisted in a file slot under the configured data directory
    pub fn open(config: &RosterConfig) -> Self {
        let slot = FileSlot::new(&config.data_dir, &config.slot_name);
        Self::with_slot(slot, config.observer_policy)
    }

    pub fn with_slot<S: DurableSlot + 'static>(slot: S, policy: ObserverPolicy) -> Self {
        Self {
            inner: Arc::new(PersistentStore::initialize(Box::new(slot), policy)),
        }
    }

    pub fn get_all(&self) -> RosterResult<Vec<Employee>> {
        self.inner.get_all()
    }

    pub fn get_by_id(&self, id: &EmployeeId) -> RosterResult<Option<Employee>> {
        self.inner.get_by_id(id)
    }

    pub fn len(&self) -> RosterResult<usize> {
        self.inner.len()
    }

    pub fn is_empty(&self) -> RosterResult<bool> {
        self.inner.is_empty()
    }

    /// Add a record; any id on the payload's source record is ignored
    pub fn add(&self, employee: NewEmployee) -> RosterResult<CommitReport> {
        self.inner.commit(Mutation::Add(employee))
    }

    pub fn update(&self, id: &EmployeeId, patch: EmployeePatch) -> RosterResult<CommitReport> {
        self.inner.commit(Mutation::Update {
            id: id.clone(),
            patch,
        })
    }

    pub fn delete(&self, id: &EmployeeId) -> RosterResult<CommitReport> {
        self.inner.commit(Mutation::Delete(id.clone()))
    }

    /// Bulk replacement of the whole collection
    pub fn replace_all(&self, employees: Vec<Employee>) -> RosterResult<CommitReport> {
        self.inner.commit(Mutation::Replace(employees))
    }

    /// Register a change observer
    ///
    /// An observer that captures a clone of this store keeps it alive until it is
    /// unsubscribed; capture [`EmployeeStore::downgrade`] instead to avoid that.
    pub fn subscribe<F>(&self, observer: F) -> RosterResult<SubscriptionId>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> RosterResult<bool> {
        self.inner.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observer_count()
    }

    pub fn persistence_status(&self) -> PersistStatus {
        self.inner.persistence_status()
    }

    pub fn slot_name(&self) -> &str {
        self.inner.slot_name()
    }

    pub fn downgrade(&self) -> WeakEmployeeStore {
        WeakEmployeeStore {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

/// Non-owning store handle for observers
#[derive(Clone)]
pub struct WeakEmployeeStore {
    inner: Weak<PersistentStore>,
}

impl WeakEmployeeStore {
    pub fn upgrade(&self) -> Option<EmployeeStore> {
        self.inner.upgrade().map(|inner| EmployeeStore { inner })
    }
}
