//! Connect Shop Store - durable contact storage.
//!
//! A single SQLite file holds one table:
//!
//! ```sql
//! contacts(id INTEGER PRIMARY KEY, name TEXT NOT NULL, phone TEXT NOT NULL UNIQUE)
//! ```
//!
//! The table is created if absent when the store is opened. [`ContactStore`]
//! owns the one connection for the process lifetime; every operation is
//! synchronous and atomic under SQLite's transactional write, so a failed
//! call never leaves a partial mutation behind.
//!
//! Phone numbers are stored pre-validated: the write paths take
//! [`PhoneNumber`](connect_shop_core::PhoneNumber), so shape validation
//! happens at the caller before the store is touched and is not repeated
//! here.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod contact;
pub mod error;
pub mod store;

pub use contact::Contact;
pub use error::StoreError;
pub use store::ContactStore;
