//! Phone-prefix autocomplete policy.
//!
//! The store answers any prefix, but querying on every keystroke is
//! wasteful and a one- or two-digit prefix matches essentially everything.
//! The caller layer therefore only consults the store once the typed
//! prefix reaches [`MIN_PREFIX_LEN`] characters; shorter input yields no
//! suggestions and no query.

use connect_shop_store::{Contact, ContactStore, StoreError};

/// Minimum typed length before the store is consulted.
pub const MIN_PREFIX_LEN: usize = 3;

/// Suggest contacts whose phone starts with `input`.
///
/// Returns an empty list without touching the store when `input` is
/// shorter than [`MIN_PREFIX_LEN`] characters. Suggestions come back in
/// insertion order.
///
/// # Errors
///
/// Returns `StoreError` if the underlying prefix query fails.
pub fn suggestions(store: &ContactStore, input: &str) -> Result<Vec<Contact>, StoreError> {
    if input.chars().count() < MIN_PREFIX_LEN {
        return Ok(Vec::new());
    }
    store.find_by_prefix(input)
}
