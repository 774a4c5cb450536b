//! Mutation engine for the employee collection
//!
//! `reduce` is the single place the record list changes. It takes the current
//! collection by value and hands back the next one together with an outcome the
//! caller can inspect; it performs no IO.

use crate::employees::{Employee, EmployeeId, EmployeePatch, NewEmployee};
use crate::store::ids::IdGenerator;
use std::collections::HashSet;
use tracing::warn;

/// An intended change to the collection
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Append a new record; the store assigns its id
    Add(NewEmployee),
    /// Shallow-merge `patch` into the record with `id`
    Update { id: EmployeeId, patch: EmployeePatch },
    /// Remove the record with this id
    Delete(EmployeeId),
    /// Swap in a whole new collection (bulk load)
    Replace(Vec<Employee>),
}

impl Mutation {
    pub fn kind(&self) -> &'static str {
        match self {
            Mutation::Add(_) => "add",
            Mutation::Update { .. } => "update",
            Mutation::Delete(_) => "delete",
            Mutation::Replace(_) => "replace",
        }
    }
}

/// What a mutation actually did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Added(EmployeeId),
    Updated(EmployeeId),
    Deleted(EmployeeId),
    Replaced(usize),
    /// Update or delete targeted an unknown id; the collection is unchanged
    NotFound(EmployeeId),
}

impl MutationOutcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, MutationOutcome::NotFound(_))
    }

    /// Id of the record that was added, if any
    pub fn added_id(&self) -> Option<&EmployeeId> {
        match self {
            MutationOutcome::Added(id) => Some(id),
            _ => None,
        }
    }
}

/// Next collection plus the outcome that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Reduced {
    pub employees: Vec<Employee>,
    pub outcome: MutationOutcome,
}

/// Compute the next collection
pub fn reduce(mut employees: Vec<Employee>, mutation: Mutation, ids: &mut IdGenerator) -> Reduced {
    let outcome = match mutation {
        Mutation::Add(new) => {
            let id = ids.next_id(|candidate| employees.iter().any(|e| &e.id == candidate));
            employees.push(Employee::from_new(id.clone(), new));
            MutationOutcome::Added(id)
        }

        Mutation::Update { id, patch } => match employees.iter_mut().find(|e| e.id == id) {
            Some(existing) => {
                existing.apply(patch);
                MutationOutcome::Updated(id)
            }
            None => MutationOutcome::NotFound(id),
        },

        Mutation::Delete(id) => {
            let before = employees.len();
            employees.retain(|e| e.id != id);
            if employees.len() < before {
                MutationOutcome::Deleted(id)
            } else {
                MutationOutcome::NotFound(id)
            }
        }

        Mutation::Replace(all) => {
            employees = dedup_by_id(all);
            MutationOutcome::Replaced(employees.len())
        }
    };

    Reduced { employees, outcome }
}

/// Drop later records that reuse an earlier record's id
pub fn dedup_by_id(employees: Vec<Employee>) -> Vec<Employee> {
    let mut seen = HashSet::with_capacity(employees.len());
    let mut kept = Vec::with_capacity(employees.len());

    for employee in employees {
        if seen.insert(employee.id.clone()) {
            kept.push(employee);
        } else {
            warn!("Dropping duplicate employee id {}", employee.id);
        }
    }

    kept
}
