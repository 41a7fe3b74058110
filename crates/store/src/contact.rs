//! The stored contact record.

use serde::{Deserialize, Serialize};

use connect_shop_core::{ContactId, PhoneNumber};

/// A stored (name, phone) pair, uniquely keyed by phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Surrogate identity assigned by the store. Immutable once assigned
    /// and never reused after deletion.
    pub id: ContactId,
    /// Free-text label. Not required to be unique.
    pub name: String,
    /// Unique key across all contacts.
    pub phone: PhoneNumber,
}
