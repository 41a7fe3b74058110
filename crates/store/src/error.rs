//! Store error types.

use thiserror::Error;

/// Errors raised by [`ContactStore`](crate::ContactStore) operations.
///
/// None of these are fatal: every failure is a return-level signal the
/// caller can report and recover from, and a failed operation leaves the
/// store unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A contact with this phone number already exists.
    #[error("a contact with phone {phone} already exists")]
    DuplicatePhone {
        /// The colliding phone number.
        phone: String,
    },

    /// No contact matches this phone number.
    #[error("no contact with phone {phone}")]
    NotFound {
        /// The phone number that was looked up.
        phone: String,
    },

    /// A stored value no longer parses as a valid domain type.
    #[error("corrupt row in contacts table: {0}")]
    Corrupt(String),

    /// The underlying SQLite call failed.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
