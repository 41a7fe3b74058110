//! Caller-layer autocomplete policy at the integration boundary.
//!
//! The store itself answers any prefix; the frontend layer must not
//! consult it until the typed prefix reaches three characters. These tests
//! pin that boundary from outside both crates.

#![allow(clippy::unwrap_used)]

use connect_shop_cli::autocomplete::{MIN_PREFIX_LEN, suggestions};
use connect_shop_integration_tests::seed;
use connect_shop_store::ContactStore;

#[test]
fn test_policy_floor_is_three() {
    assert_eq!(MIN_PREFIX_LEN, 3);
}

#[test]
fn test_below_floor_returns_nothing_despite_matches() {
    let store = ContactStore::open_in_memory().unwrap();
    seed(&store, &[("Ahmed", "01012345678"), ("Nour", "01112345678")]).unwrap();

    // Both stored phones start with "01", but the prefix is below the floor
    assert!(suggestions(&store, "01").unwrap().is_empty());

    // The store itself would have answered
    assert_eq!(store.find_by_prefix("01").unwrap().len(), 2);
}

#[test]
fn test_at_floor_returns_matches_in_insertion_order() {
    let store = ContactStore::open_in_memory().unwrap();
    seed(
        &store,
        &[
            ("Late", "01099999999"),
            ("Early", "01012345678"),
            ("Other", "01112345678"),
        ],
    )
    .unwrap();

    let hits = suggestions(&store, "010").unwrap();
    let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Late", "Early"]);
}

#[test]
fn test_full_number_prefix_narrows_to_one() {
    let store = ContactStore::open_in_memory().unwrap();
    seed(&store, &[("Ahmed", "01012345678"), ("Nour", "01012345679")]).unwrap();

    let hits = suggestions(&store, "01012345678").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits.first().unwrap().name, "Ahmed");
}
