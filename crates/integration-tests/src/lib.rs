//! Integration tests for Connect Shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p connect-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_durability` - On-disk persistence across store reopens
//! - `autocomplete_policy` - Caller-layer minimum-prefix boundary
//! - `transfer_flow` - Validate, look up, and generate a code end to end

#![cfg_attr(not(test), forbid(unsafe_code))]

use connect_shop_core::PhoneNumber;
use connect_shop_store::{Contact, ContactStore, StoreError};

/// Parse a known-good phone number for test fixtures.
///
/// # Panics
///
/// Panics if `s` is not a valid Egyptian mobile number; tests pass
/// literals.
#[must_use]
pub fn phone(s: &str) -> PhoneNumber {
    PhoneNumber::parse(s).unwrap_or_else(|e| panic!("bad fixture phone {s:?}: {e}"))
}

/// Seed a store with `(name, phone)` fixtures.
///
/// # Errors
///
/// Returns `StoreError` if any insert fails.
pub fn seed(store: &ContactStore, contacts: &[(&str, &str)]) -> Result<Vec<Contact>, StoreError> {
    contacts
        .iter()
        .map(|(name, p)| store.insert(name, &phone(p)))
        .collect()
}
