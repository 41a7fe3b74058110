//! Core types for Connect Shop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod amount;
pub mod id;
pub mod phone;

pub use amount::{Amount, AmountError};
pub use id::*;
pub use phone::{Network, PhoneError, PhoneNumber};
