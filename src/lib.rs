pub mod cli;
pub mod config;
pub mod employees;
pub mod error;
pub mod listing;
pub mod locale;
pub mod store;

pub use config::RosterConfig;
pub use employees::{Employee, EmployeeDraft, EmployeeId, EmployeePatch, NewEmployee};
pub use error::{RosterError, RosterResult};
pub use listing::EmployeeListing;
pub use store::EmployeeStore;
