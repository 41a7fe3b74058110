//! Contact repository over a single SQLite connection.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use connect_shop_core::{ContactId, PhoneNumber};

use crate::contact::Contact;
use crate::error::StoreError;

/// Raw `(id, name, phone)` row before domain conversion.
type RawContact = (i64, String, String);

/// Durable mapping from phone number to contact name.
///
/// Owns the one connection to the backing file for the process lifetime;
/// the connection is released when the store is dropped. Construct it once
/// and hand references to whatever layer needs it.
pub struct ContactStore {
    conn: Connection,
}

impl ContactStore {
    /// Open (or create) the contact database at `path`.
    ///
    /// The `contacts` table is created if absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sqlite` if the file cannot be opened or the
    /// schema cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "opened contact database");
        Self::with_connection(conn)
    }

    /// Open an in-memory database. Used by tests.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sqlite` if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        // AUTOINCREMENT keeps deleted ids from ever being reassigned
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS contacts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                phone TEXT NOT NULL UNIQUE
            );",
        )?;
        Ok(Self { conn })
    }

    /// Insert a new contact.
    ///
    /// The phone is already shape-validated by construction; the store does
    /// not re-validate it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicatePhone` if a contact with this phone
    /// already exists. The store is left unchanged.
    pub fn insert(&self, name: &str, phone: &PhoneNumber) -> Result<Contact, StoreError> {
        self.conn
            .execute(
                "INSERT INTO contacts (name, phone) VALUES (?1, ?2)",
                params![name, phone],
            )
            .map_err(|e| duplicate_phone(phone.as_str(), e))?;

        let id = ContactId::new(self.conn.last_insert_rowid());
        tracing::debug!(%id, phone = %phone, "inserted contact");
        Ok(Contact {
            id,
            name: name.to_owned(),
            phone: phone.clone(),
        })
    }

    /// Look up the contact stored under exactly this phone number.
    ///
    /// `None` means no contact matches.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sqlite` if the query fails, or
    /// `StoreError::Corrupt` if the stored phone no longer parses.
    pub fn find_by_phone(&self, phone: &str) -> Result<Option<Contact>, StoreError> {
        let row: Option<RawContact> = self
            .conn
            .query_row(
                "SELECT id, name, phone FROM contacts WHERE phone = ?1",
                [phone],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .optional()?;
        row.map(to_contact).transpose()
    }

    /// Look up a contact by name.
    ///
    /// Names are not unique; the earliest-inserted match wins.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sqlite` if the query fails, or
    /// `StoreError::Corrupt` if the stored phone no longer parses.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Contact>, StoreError> {
        let row: Option<RawContact> = self
            .conn
            .query_row(
                "SELECT id, name, phone FROM contacts WHERE name = ?1 ORDER BY id LIMIT 1",
                [name],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .optional()?;
        row.map(to_contact).transpose()
    }

    /// All contacts whose phone starts with `prefix`, in insertion order.
    ///
    /// The store answers any prefix length; the minimum-length
    /// autocomplete policy belongs to the caller layer.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sqlite` if the query fails, or
    /// `StoreError::Corrupt` if a stored phone no longer parses.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Vec<Contact>, StoreError> {
        let pattern = format!("{}%", escape_like(prefix));
        let mut stmt = self.conn.prepare(
            "SELECT id, name, phone FROM contacts WHERE phone LIKE ?1 ESCAPE '\\' ORDER BY id",
        )?;
        let rows = stmt.query_map([pattern], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)))?;

        let mut contacts = Vec::new();
        for row in rows {
            contacts.push(to_contact(row?)?);
        }
        Ok(contacts)
    }

    /// All contact names, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sqlite` if the query fails.
    pub fn list_names(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM contacts ORDER BY id")?;
        let rows = stmt.query_map([], |r| r.get(0))?;
        Ok(rows.collect::<Result<Vec<String>, _>>()?)
    }

    /// Rekey the contact stored under `old_phone` to a new name and phone.
    ///
    /// Rekeying onto a phone held by a different contact is rejected: the
    /// UNIQUE constraint stays authoritative and the store is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no contact has `old_phone`, or
    /// `StoreError::DuplicatePhone` if `new_phone` belongs to a different
    /// contact.
    pub fn update(
        &self,
        old_phone: &str,
        new_name: &str,
        new_phone: &PhoneNumber,
    ) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute(
                "UPDATE contacts SET name = ?1, phone = ?2 WHERE phone = ?3",
                params![new_name, new_phone, old_phone],
            )
            .map_err(|e| duplicate_phone(new_phone.as_str(), e))?;

        if changed == 0 {
            return Err(StoreError::NotFound {
                phone: old_phone.to_owned(),
            });
        }
        tracing::debug!(old = %old_phone, new = %new_phone, "updated contact");
        Ok(())
    }

    /// Delete the contact stored under `phone`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no contact matches; the store is
    /// unchanged.
    pub fn delete(&self, phone: &str) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM contacts WHERE phone = ?1", [phone])?;
        if deleted == 0 {
            return Err(StoreError::NotFound {
                phone: phone.to_owned(),
            });
        }
        tracing::debug!(%phone, "deleted contact");
        Ok(())
    }

    /// Number of stored contacts.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sqlite` if the query fails.
    pub fn len(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts", [], |r| r.get(0))?;
        Ok(count.unsigned_abs())
    }

    /// True iff no contacts are stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sqlite` if the query fails.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

/// Escape `%`, `_` and the escape character itself for a LIKE pattern.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn to_contact((id, name, phone): RawContact) -> Result<Contact, StoreError> {
    let phone = PhoneNumber::parse(&phone)
        .map_err(|e| StoreError::Corrupt(format!("invalid phone {phone:?}: {e}")))?;
    Ok(Contact {
        id: ContactId::new(id),
        name,
        phone,
    })
}

/// Map a UNIQUE-constraint failure on `phone` to `DuplicatePhone`.
fn duplicate_phone(phone: &str, e: rusqlite::Error) -> StoreError {
    match e {
        rusqlite::Error::SqliteFailure(f, _)
            if f.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StoreError::DuplicatePhone {
                phone: phone.to_owned(),
            }
        }
        other => StoreError::Sqlite(other),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn phone(s: &str) -> PhoneNumber {
        PhoneNumber::parse(s).unwrap()
    }

    fn store_with(contacts: &[(&str, &str)]) -> ContactStore {
        let store = ContactStore::open_in_memory().unwrap();
        for (name, p) in contacts {
            store.insert(name, &phone(p)).unwrap();
        }
        store
    }

    #[test]
    fn test_insert_then_find_by_phone_roundtrips_name() {
        let store = store_with(&[("Ahmed", "01012345678")]);

        let found = store.find_by_phone("01012345678").unwrap().unwrap();
        assert_eq!(found.name, "Ahmed");
        assert_eq!(found.phone.as_str(), "01012345678");
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let store = store_with(&[("A", "01012345678"), ("B", "01112345678")]);

        let a = store.find_by_phone("01012345678").unwrap().unwrap();
        let b = store.find_by_phone("01112345678").unwrap().unwrap();
        assert!(a.id < b.id);
    }

    #[test]
    fn test_duplicate_insert_fails_and_keeps_first_name() {
        let store = store_with(&[("First", "01012345678")]);

        let err = store.insert("Second", &phone("01012345678")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicatePhone { ref phone } if phone == "01012345678"));

        // First write wins; no mutation happened
        let found = store.find_by_phone("01012345678").unwrap().unwrap();
        assert_eq!(found.name, "First");
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_find_by_phone_missing() {
        let store = store_with(&[]);
        assert!(store.find_by_phone("01012345678").unwrap().is_none());
    }

    #[test]
    fn test_find_by_name_returns_earliest_match() {
        let store = store_with(&[("Ahmed", "01012345678"), ("Ahmed", "01112345678")]);

        let found = store.find_by_name("Ahmed").unwrap().unwrap();
        assert_eq!(found.phone.as_str(), "01012345678");
        assert!(store.find_by_name("Nour").unwrap().is_none());
    }

    #[test]
    fn test_find_by_prefix_insertion_order() {
        let store = store_with(&[
            ("C", "01099999999"),
            ("A", "01012345678"),
            ("B", "01112345678"),
        ]);

        let matches = store.find_by_prefix("010").unwrap();
        let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["C", "A"]);
    }

    #[test]
    fn test_find_by_prefix_no_matches() {
        let store = store_with(&[("A", "01012345678")]);
        assert!(store.find_by_prefix("012").unwrap().is_empty());
    }

    #[test]
    fn test_find_by_prefix_wildcards_are_literal() {
        let store = store_with(&[("A", "01012345678")]);
        // `%` must not act as a wildcard inside the prefix
        assert!(store.find_by_prefix("%").unwrap().is_empty());
        assert!(store.find_by_prefix("0_0").unwrap().is_empty());
    }

    #[test]
    fn test_list_names_insertion_order() {
        let store = store_with(&[("B", "01112345678"), ("A", "01012345678")]);
        assert_eq!(store.list_names().unwrap(), ["B", "A"]);
    }

    #[test]
    fn test_update_rekeys_contact() {
        let store = store_with(&[("Old", "01012345678")]);
        let before = store.find_by_phone("01012345678").unwrap().unwrap();

        store
            .update("01012345678", "New", &phone("01112345678"))
            .unwrap();

        assert!(store.find_by_phone("01012345678").unwrap().is_none());
        let after = store.find_by_phone("01112345678").unwrap().unwrap();
        assert_eq!(after.name, "New");
        // id survives the rekey
        assert_eq!(after.id, before.id);
    }

    #[test]
    fn test_update_same_phone_changes_name_only() {
        let store = store_with(&[("Old", "01012345678")]);
        store
            .update("01012345678", "New", &phone("01012345678"))
            .unwrap();
        let found = store.find_by_phone("01012345678").unwrap().unwrap();
        assert_eq!(found.name, "New");
    }

    #[test]
    fn test_update_missing_contact() {
        let store = store_with(&[]);
        let err = store
            .update("01012345678", "New", &phone("01112345678"))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref phone } if phone == "01012345678"));
    }

    #[test]
    fn test_update_onto_existing_phone_is_rejected() {
        let store = store_with(&[("A", "01012345678"), ("B", "01112345678")]);

        let err = store
            .update("01012345678", "A2", &phone("01112345678"))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicatePhone { ref phone } if phone == "01112345678"));

        // Both contacts unchanged
        assert_eq!(
            store.find_by_phone("01012345678").unwrap().unwrap().name,
            "A"
        );
        assert_eq!(
            store.find_by_phone("01112345678").unwrap().unwrap().name,
            "B"
        );
    }

    #[test]
    fn test_delete() {
        let store = store_with(&[("A", "01012345678")]);
        store.delete("01012345678").unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_delete_missing_leaves_store_unchanged() {
        let store = store_with(&[("A", "01012345678")]);

        let err = store.delete("01112345678").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref phone } if phone == "01112345678"));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = store_with(&[("A", "01012345678")]);
        let a = store.find_by_phone("01012345678").unwrap().unwrap();

        store.delete("01012345678").unwrap();
        let b = store.insert("B", &phone("01112345678")).unwrap();
        assert!(b.id > a.id);
    }
}
