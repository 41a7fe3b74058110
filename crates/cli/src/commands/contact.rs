//! Contact management commands.
//!
//! # Usage
//!
//! ```bash
//! # Save a contact
//! connect-shop contact add "Ahmed" 01012345678
//!
//! # Autocomplete while typing a number
//! connect-shop contact suggest 010
//!
//! # Rekey a contact
//! connect-shop contact edit 01012345678 --name "Ahmed S." --phone 01112345678
//! ```
//!
//! # Environment Variables
//!
//! - `CONNECT_SHOP_DB` - Path to the contact database file

use connect_shop_core::{PhoneError, PhoneNumber};
use connect_shop_store::{ContactStore, StoreError};

use crate::autocomplete;
use crate::config::{CliConfig, ConfigError};

/// Errors that can occur during contact operations.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The phone number does not have the Egyptian mobile shape.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(#[from] PhoneError),

    /// The store operation failed.
    #[error("Contact store error: {0}")]
    Store(#[from] StoreError),
}

/// Open the contact store configured by the environment.
///
/// # Errors
///
/// Returns `ContactError` if configuration or the database open fails.
pub fn open_store() -> Result<ContactStore, ContactError> {
    let config = CliConfig::from_env()?;
    Ok(ContactStore::open(&config.database_path)?)
}

/// Save a new contact. The phone shape is validated before the store is
/// touched; the store does not re-validate.
///
/// # Errors
///
/// Returns `ContactError::InvalidPhone` for a malformed number and
/// `ContactError::Store` for `DuplicatePhone` and database failures.
pub fn add(store: &ContactStore, name: &str, phone: &str) -> Result<(), ContactError> {
    let phone = PhoneNumber::parse(phone)?;
    let contact = store.insert(name, &phone)?;
    tracing::info!("Saved contact {} ({})", contact.name, contact.phone);
    Ok(())
}

/// Look up the contact stored under a phone number.
///
/// # Errors
///
/// Returns `ContactError::Store` with `NotFound` if no contact matches.
pub fn find(store: &ContactStore, phone: &str) -> Result<(), ContactError> {
    match store.find_by_phone(phone)? {
        Some(contact) => {
            tracing::info!("{} - {}", contact.name, contact.phone);
            Ok(())
        }
        None => Err(StoreError::NotFound {
            phone: phone.to_owned(),
        }
        .into()),
    }
}

/// Look up a contact's phone number by name, as the original name-list
/// dialog does.
///
/// # Errors
///
/// Returns `ContactError::Store` for database failures.
pub fn find_name(store: &ContactStore, name: &str) -> Result<(), ContactError> {
    match store.find_by_name(name)? {
        Some(contact) => tracing::info!("{} - {}", contact.name, contact.phone),
        None => tracing::warn!("No contact named {name}"),
    }
    Ok(())
}

/// Print all contact names in insertion order.
///
/// # Errors
///
/// Returns `ContactError::Store` for database failures.
pub fn list(store: &ContactStore) -> Result<(), ContactError> {
    let names = store.list_names()?;
    if names.is_empty() {
        tracing::info!("No contacts saved");
    }
    for name in names {
        tracing::info!("{name}");
    }
    Ok(())
}

/// Print autocomplete suggestions for a typed prefix.
///
/// # Errors
///
/// Returns `ContactError::Store` for database failures.
pub fn suggest(store: &ContactStore, prefix: &str) -> Result<(), ContactError> {
    for contact in autocomplete::suggestions(store, prefix)? {
        tracing::info!("{} - {}", contact.name, contact.phone);
    }
    Ok(())
}

/// Rekey the contact at `phone` to a new name and/or phone.
///
/// Omitted fields keep their current value. The new phone shape is
/// validated before the store is touched.
///
/// # Errors
///
/// Returns `ContactError::Store` with `NotFound` if no contact has
/// `phone`, or `DuplicatePhone` if the new phone belongs to a different
/// contact.
pub fn edit(
    store: &ContactStore,
    phone: &str,
    new_name: Option<&str>,
    new_phone: Option<&str>,
) -> Result<(), ContactError> {
    let Some(current) = store.find_by_phone(phone)? else {
        return Err(StoreError::NotFound {
            phone: phone.to_owned(),
        }
        .into());
    };

    let name = new_name.unwrap_or(current.name.as_str());
    let new_phone = match new_phone {
        Some(p) => PhoneNumber::parse(p)?,
        None => current.phone.clone(),
    };

    store.update(phone, name, &new_phone)?;
    tracing::info!("Updated contact {} ({})", name, new_phone);
    Ok(())
}

/// Delete the contact stored under a phone number.
///
/// # Errors
///
/// Returns `ContactError::Store` with `NotFound` if no contact matches.
pub fn delete(store: &ContactStore, phone: &str) -> Result<(), ContactError> {
    store.delete(phone)?;
    tracing::info!("Deleted contact {phone}");
    Ok(())
}
