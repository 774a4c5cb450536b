//! Employee store: mutation engine, durable slot, subscription broker and the
//! facade the rest of the application talks to.
//!
//! Data flows one way: facade call → `reduce` → commit + persist → notify.

pub mod broker;
pub mod facade;
pub mod ids;
pub mod mutation;
pub mod persistent;
pub mod slot;

pub use broker::{NotifyReport, ObserverPolicy, SubscriptionBroker, SubscriptionId};
pub use facade::{EmployeeStore, WeakEmployeeStore};
pub use ids::IdGenerator;
pub use mutation::{reduce, Mutation, MutationOutcome, Reduced};
pub use persistent::{CommitReport, PersistStatus, PersistentStore};
pub use slot::{DurableSlot, FileSlot, MemorySlot};
