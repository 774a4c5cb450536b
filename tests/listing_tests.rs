//! Integration tests for the list view-model wired to a live store

use roster::employees::{seed_employees, EmployeeId, NewEmployee};
use roster::listing::{read_listing, write_listing, EmployeeListing, PageItem};
use roster::store::{EmployeeStore, MemorySlot, ObserverPolicy};

fn seeded_store() -> EmployeeStore {
    EmployeeStore::with_slot(MemorySlot::new("employee_records"), ObserverPolicy::Isolate)
}

#[test]
fn test_connected_listing_follows_store_changes() {
    let store = seeded_store();
    let (listing, _subscription) = EmployeeListing::connect(&store, 10).unwrap();
    assert_eq!(read_listing(&listing, |l| l.total_pages()).unwrap(), 2);

    for n in 0..9 {
        store
            .add(NewEmployee {
                first_name: format!("Extra{}", n),
                ..NewEmployee::default()
            })
            .unwrap();
    }

    let (count, pages) = read_listing(&listing, |l| (l.employees().len(), l.total_pages())).unwrap();
    assert_eq!(count, seed_employees().len() + 9);
    assert_eq!(pages, 3);
}

#[test]
fn test_search_narrows_pages() {
    let store = seeded_store();
    let (listing, _subscription) = EmployeeListing::connect(&store, 10).unwrap();

    write_listing(&listing, |l| {
        assert!(l.go_to_page(2));
        l.set_search_term("Tech");
    })
    .unwrap();

    read_listing(&listing, |l| {
        assert_eq!(l.current_page(), 1);
        assert_eq!(l.filtered().len(), 7);
        assert_eq!(l.total_pages(), 1);
        assert!(l.page_strip().is_empty());
        assert_eq!(l.summary().to_string(), "Page 1 of 1 (7 employees)");
    })
    .unwrap();
}

#[test]
fn test_search_by_email() {
    let mut listing = EmployeeListing::with_employees(seed_employees(), 10);
    listing.set_search_term("lukas.becker@");
    let found = listing.filtered();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].last_name, "Becker");
}

#[test]
fn test_confirm_delete_through_shared_listing() {
    let store = seeded_store();
    let (listing, _subscription) = EmployeeListing::connect(&store, 10).unwrap();
    let target = EmployeeId::new("3");

    let report = write_listing(&listing, |l| {
        assert!(l.request_delete(&target));
        l.confirm_delete(&store)
    })
    .unwrap()
    .unwrap()
    .unwrap();

    assert!(!report.outcome.is_not_found());
    assert!(store.get_by_id(&target).unwrap().is_none());
    read_listing(&listing, |l| {
        assert!(l.pending_delete().is_none());
        assert_eq!(l.employees().len(), seed_employees().len() - 1);
    })
    .unwrap();
}

#[test]
fn test_cancelled_delete_leaves_store_untouched() {
    let store = seeded_store();
    let mut listing = EmployeeListing::with_employees(store.get_all().unwrap(), 10);

    assert!(listing.request_delete(&EmployeeId::new("1")));
    listing.cancel_delete();
    assert!(listing.confirm_delete(&store).unwrap().is_none());
    assert_eq!(store.len().unwrap(), seed_employees().len());
}

#[test]
fn test_dropped_listing_observer_is_harmless() {
    let store = seeded_store();
    let (listing, subscription) = EmployeeListing::connect(&store, 10).unwrap();
    drop(listing);

    store.add(NewEmployee::default()).unwrap();
    assert!(store.unsubscribe(subscription).unwrap());
}

#[test]
fn test_long_strip_collapses() {
    let many: Vec<_> = (0..10).flat_map(|_| seed_employees()).collect();
    let mut listing = EmployeeListing::with_employees(many, 12);
    assert_eq!(listing.total_pages(), 10);
    assert!(listing.go_to_page(6));
    assert_eq!(
        listing.page_strip(),
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Page(7),
            PageItem::Ellipsis,
            PageItem::Page(10),
        ]
    );
}
