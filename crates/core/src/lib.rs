//! Connect Shop Core - Shared types library.
//!
//! This crate provides the common types used across all Connect Shop
//! components:
//! - `store` - SQLite-backed contact storage
//! - `cli` - Command-line frontend
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for phone numbers, amounts, and IDs
//! - [`ussd`] - USSD transfer-code generation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod ussd;

pub use types::*;
pub use ussd::{Terminator, TransferCode, build_code};
