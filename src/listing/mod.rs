//! List view state: search, pagination, view mode and the delete confirmation
//! flow, derived from a snapshot of the store's records.

pub mod filter;
pub mod pagination;

pub use filter::{filter_records, matches_search};
pub use pagination::{page_slice, page_strip, total_pages, PageItem};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::employees::{Employee, EmployeeId};
use crate::error::{RosterError, RosterResult};
use crate::store::{CommitReport, EmployeeStore, SubscriptionId};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

/// Listing shared with the store observer that keeps it current
pub type SharedListing = Arc<RwLock<EmployeeListing>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::List,
            ViewMode::List => ViewMode::Table,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Table => f.write_str("table"),
            ViewMode::List => f.write_str("list"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "list" => Ok(ViewMode::List),
            other => Err(format!("Unknown view mode: {}", other)),
        }
    }
}

/// Page position shown under the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSummary {
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl fmt::Display for ListingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page {} of {} ({} employees)",
            self.current_page, self.total_pages, self.filtered_count
        )
    }
}

/// View-model for the employee list
#[derive(Debug, Clone)]
pub struct EmployeeListing {
    employees: Vec<Employee>,
    search_term: String,
    current_page: usize,
    page_size: usize,
    view_mode: ViewMode,
    pending_delete: Option<Employee>,
}

impl Default for EmployeeListing {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl EmployeeListing {
    pub fn new(page_size: usize) -> Self {
        Self {
            employees: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
            view_mode: ViewMode::default(),
            pending_delete: None,
        }
    }

    pub fn with_employees(employees: Vec<Employee>, page_size: usize) -> Self {
        let mut listing = Self::new(page_size);
        listing.set_employees(employees);
        listing
    }

    /// Build a listing from the store and keep it current on every change
    ///
    /// The observer holds only weak handles, so dropping the listing (or the
    /// store) turns it into a no-op. Unsubscribe with the returned id to remove
    /// it entirely.
    pub fn connect(
        store: &EmployeeStore,
        page_size: usize,
    ) -> RosterResult<(SharedListing, SubscriptionId)> {
        let listing = Arc::new(RwLock::new(Self::with_employees(store.get_all()?, page_size)));

        let weak_listing = Arc::downgrade(&listing);
        let weak_store = store.downgrade();
        let subscription = store.subscribe(move || {
            let (Some(listing), Some(store)) = (weak_listing.upgrade(), weak_store.upgrade())
            else {
                return;
            };
            let employees = match store.get_all() {
                Ok(employees) => employees,
                Err(e) => {
                    debug!("Listing refresh skipped: {}", e);
                    return;
                }
            };
            // A listing locked by its own holder refreshes itself after the commit
            match listing.try_write() {
                Ok(mut listing) => listing.set_employees(employees),
                Err(_) => trace!("Listing busy, refresh left to its holder"),
            };
        })?;

        debug!("Listing connected to store slot '{}'", store.slot_name());
        Ok((listing, subscription))
    }

    /// Replace the record snapshot
    ///
    /// The current page is pulled back inside the new page range.
    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        let total = self.total_pages();
        if self.current_page > total {
            self.current_page = total.max(1);
        }
        if let Some(pending) = &self.pending_delete {
            if !self.employees.iter().any(|e| e.id == pending.id) {
                self.pending_delete = None;
            }
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Set the search term (stored lowercased) and go back to page 1
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
        self.current_page = 1;
    }

    /// Records matching the search term, in store order
    pub fn filtered(&self) -> Vec<&Employee> {
        filter_records(&self.employees, &self.search_term)
    }

    /// Records on the current page
    pub fn page_items(&self) -> Vec<&Employee> {
        let filtered = self.filtered();
        page_slice(&filtered, self.current_page, self.page_size).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move to `page`; pages outside `1..=total_pages` are rejected
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Page-number strip; empty when there is at most one page
    pub fn page_strip(&self) -> Vec<PageItem> {
        let total = self.total_pages();
        if total <= 1 {
            return Vec::new();
        }
        page_strip(self.current_page, total)
    }

    pub fn summary(&self) -> ListingSummary {
        ListingSummary {
            current_page: self.current_page,
            total_pages: self.total_pages(),
            filtered_count: self.filtered().len(),
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    /// Ask for confirmation before deleting `id`; false when it is not listed
    pub fn request_delete(&mut self, id: &EmployeeId) -> bool {
        match self.employees.iter().find(|e| &e.id == id) {
            Some(employee) => {
                self.pending_delete = Some(employee.clone());
                true
            }
            None => false,
        }
    }

    pub fn pending_delete(&self) -> Option<&Employee> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the pending record through `store` and refresh the snapshot
    ///
    /// Returns `None` when nothing was pending.
    pub fn confirm_delete(&mut self, store: &EmployeeStore) -> RosterResult<Option<CommitReport>> {
        let Some(employee) = self.pending_delete.take() else {
            return Ok(None);
        };
        let report = store.delete(&employee.id)?;
        self.set_employees(store.get_all()?);
        Ok(Some(report))
    }
}

/// Read the listing behind a shared handle
pub fn read_listing<T>(
    listing: &SharedListing,
    f: impl FnOnce(&EmployeeListing) -> T,
) -> RosterResult<T> {
    let guard = listing
        .read()
        .map_err(|e| RosterError::lock(format!("listing read lock poisoned: {}", e)))?;
    Ok(f(&guard))
}

/// Update the listing behind a shared handle
pub fn write_listing<T>(
    listing: &SharedListing,
    f: impl FnOnce(&mut EmployeeListing) -> T,
) -> RosterResult<T> {
    let mut guard = listing
        .write()
        .map_err(|e| RosterError::lock(format!("listing write lock poisoned: {}", e)))?;
    Ok(f(&mut guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employees::{Department, Position};

    fn numbered(count: usize) -> Vec<Employee> {
        (1..=count)
            .map(|n| Employee {
                id: EmployeeId::new(n.to_string()),
                first_name: format!("First{}", n),
                last_name: format!("Last{}", n),
                email: format!("person{}@ing.com", n),
                phone: String::new(),
                date_of_birth: String::new(),
                date_of_employment: String::new(),
                department: if n % 2 == 0 {
                    Department::Tech
                } else {
                    Department::Analytics
                },
                position: Position::Junior,
            })
            .collect()
    }

    #[test]
    fn test_pages_over_twenty_five_records() {
        let mut listing = EmployeeListing::with_employees(numbered(25), 10);
        assert_eq!(listing.total_pages(), 3);
        assert_eq!(listing.page_items().len(), 10);

        assert!(listing.go_to_page(3));
        assert_eq!(listing.page_items().len(), 5);
        assert_eq!(listing.page_items()[0].id.as_str(), "21");

        assert!(!listing.go_to_page(0));
        assert!(!listing.go_to_page(4));
        assert_eq!(listing.current_page(), 3);
    }

    #[test]
    fn test_search_resets_page_and_lowercases() {
        let mut listing = EmployeeListing::with_employees(numbered(25), 10);
        listing.go_to_page(2);

        listing.set_search_term("TECH");
        assert_eq!(listing.search_term(), "tech");
        assert_eq!(listing.current_page(), 1);
        assert_eq!(listing.filtered().len(), 12);
    }

    #[test]
    fn test_empty_listing_rejects_every_page() {
        let mut listing = EmployeeListing::new(10);
        assert_eq!(listing.total_pages(), 0);
        assert!(!listing.go_to_page(1));
        assert!(listing.page_strip().is_empty());
        assert_eq!(listing.summary().to_string(), "Page 1 of 0 (0 employees)");
    }

    #[test]
    fn test_single_page_has_no_strip() {
        let listing = EmployeeListing::with_employees(numbered(4), 10);
        assert!(listing.page_strip().is_empty());
    }

    #[test]
    fn test_shrinking_snapshot_clamps_page() {
        let mut listing = EmployeeListing::with_employees(numbered(25), 10);
        listing.go_to_page(3);
        listing.set_employees(numbered(12));
        assert_eq!(listing.current_page(), 2);
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let mut listing = EmployeeListing::with_employees(numbered(3), 10);
        assert!(!listing.request_delete(&EmployeeId::new("missing")));

        assert!(listing.request_delete(&EmployeeId::new("2")));
        assert_eq!(listing.pending_delete().map(|e| e.first_name.as_str()), Some("First2"));

        listing.cancel_delete();
        assert!(listing.pending_delete().is_none());
    }

    #[test]
    fn test_view_mode_toggle() {
        let mut listing = EmployeeListing::default();
        assert_eq!(listing.view_mode(), ViewMode::Table);
        listing.toggle_view_mode();
        assert_eq!(listing.view_mode(), ViewMode::List);
        assert_eq!("TABLE".parse::<ViewMode>().unwrap(), ViewMode::Table);
    }
}
