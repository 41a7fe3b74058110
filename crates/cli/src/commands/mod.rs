//! CLI command implementations.

pub mod code;
pub mod contact;
