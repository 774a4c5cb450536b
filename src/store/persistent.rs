use crate::employees::{seed_employees, Employee, EmployeeId};
use crate::error::{RosterError, RosterResult};
use crate::store::broker::{NotifyReport, ObserverPolicy, SubscriptionBroker, SubscriptionId};
use crate::store::ids::IdGenerator;
use crate::store::mutation::{dedup_by_id, reduce, Mutation, MutationOutcome};
use crate::store::slot::DurableSlot;
use std::sync::RwLock;
use tracing::{debug, info, warn};

/// Durability of the most recent commit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersistStatus {
    /// Nothing has been written during this session
    #[default]
    Unsaved,
    Saved,
    /// The slot rejected the write; in-memory state is still authoritative
    Failed(String),
}

impl PersistStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, PersistStatus::Failed(_))
    }
}

/// Everything a caller learns from one commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    pub outcome: MutationOutcome,
    pub persistence: PersistStatus,
    pub notified: NotifyReport,
}

struct StoreState {
    employees: Vec<Employee>,
    ids: IdGenerator,
    persistence: PersistStatus,
}

/// Canonical employee collection with write-through persistence
///
/// Every commit runs reduce → persist → notify. The in-memory collection is the
/// source of truth; a failed write is logged and reported but never rolled back.
pub struct PersistentStore {
    state: RwLock<StoreState>,
    slot: Box<dyn DurableSlot>,
    broker: SubscriptionBroker,
}

impl PersistentStore {
    /// Load the collection from `slot`, falling back to the seed dataset when the
    /// slot is absent, unreadable, unparseable or empty.
    pub fn initialize(slot: Box<dyn DurableSlot>, policy: ObserverPolicy) -> Self {
        let employees = load_or_seed(slot.as_ref());
        Self {
            state: RwLock::new(StoreState {
                employees,
                ids: IdGenerator::new(),
                persistence: PersistStatus::Unsaved,
            }),
            slot,
            broker: SubscriptionBroker::new(policy),
        }
    }

    pub fn slot_name(&self) -> &str {
        self.slot.name()
    }

    /// Snapshot of the current collection
    pub fn get_all(&self) -> RosterResult<Vec<Employee>> {
        let state = self
            .state
            .read()
            .map_err(|_| RosterError::lock("Failed to acquire read lock on store"))?;
        Ok(state.employees.clone())
    }

    pub fn get_by_id(&self, id: &EmployeeId) -> RosterResult<Option<Employee>> {
        let state = self
            .state
            .read()
            .map_err(|_| RosterError::lock("Failed to acquire read lock on store"))?;
        Ok(state.employees.iter().find(|e| &e.id == id).cloned())
    }

    pub fn len(&self) -> RosterResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|_| RosterError::lock("Failed to acquire read lock on store"))?;
        Ok(state.employees.len())
    }

    pub fn is_empty(&self) -> RosterResult<bool> {
        self.len().map(|len| len == 0)
    }

    pub fn persistence_status(&self) -> PersistStatus {
        self.state
            .read()
            .map(|state| state.persistence.clone())
            .unwrap_or_else(|_| PersistStatus::Failed("store lock poisoned".to_string()))
    }

    /// Apply one mutation, persist the result, then notify observers
    ///
    /// The store lock is released before observers run.
    pub fn commit(&self, mutation: Mutation) -> RosterResult<CommitReport> {
        let kind = mutation.kind();
        let (outcome, persistence) = {
            let mut state = self
                .state
                .write()
                .map_err(|_| RosterError::lock("Failed to acquire write lock on store"))?;

            let current = std::mem::take(&mut state.employees);
            let reduced = reduce(current, mutation, &mut state.ids);
            state.employees = reduced.employees;

            let persistence = match self.persist(&state.employees) {
                Ok(()) => PersistStatus::Saved,
                Err(e) => {
                    warn!(
                        "Failed to persist employees to slot '{}': {}",
                        self.slot.name(),
                        e
                    );
                    PersistStatus::Failed(e.to_string())
                }
            };
            state.persistence = persistence.clone();
            (reduced.outcome, persistence)
        };

        debug!("Committed {} mutation: {:?}", kind, outcome);

        let notified = self.broker.notify().unwrap_or_else(|e| {
            warn!("Failed to notify observers: {}", e);
            NotifyReport::default()
        });

        Ok(CommitReport {
            outcome,
            persistence,
            notified,
        })
    }

    pub fn subscribe<F>(&self, observer: F) -> RosterResult<SubscriptionId>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.broker.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> RosterResult<bool> {
        self.broker.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.broker.len()
    }

    fn persist(&self, employees: &[Employee]) -> RosterResult<()> {
        let contents = serde_json::to_string_pretty(employees)?;
        self.slot.store(&contents)
    }
}

fn load_or_seed(slot: &dyn DurableSlot) -> Vec<Employee> {
    let contents = match slot.load() {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            info!("No saved employees in slot '{}', using seed data", slot.name());
            return seed_employees();
        }
        Err(e) => {
            warn!("Could not read slot '{}': {}; using seed data", slot.name(), e);
            return seed_employees();
        }
    };

    let records = match serde_json::from_str::<Vec<serde_json::Value>>(&contents) {
        Ok(records) => records,
        Err(e) => {
            warn!("Slot '{}' is corrupt ({}); using seed data", slot.name(), e);
            return seed_employees();
        }
    };
    if records.is_empty() {
        info!("Slot '{}' holds no employees, using seed data", slot.name());
        return seed_employees();
    }

    let total = records.len();
    let employees: Vec<Employee> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(employee) => Some(employee),
            Err(e) => {
                warn!("Skipping unreadable record {} in slot '{}': {}", index, slot.name(), e);
                None
            }
        })
        .collect();

    if employees.is_empty() {
        warn!(
            "None of the {} records in slot '{}' could be read; using seed data",
            total,
            slot.name()
        );
        return seed_employees();
    }

    let employees = dedup_by_id(employees);
    debug!("Loaded {} of {} employees from slot '{}'", employees.len(), total, slot.name());
    employees
}
