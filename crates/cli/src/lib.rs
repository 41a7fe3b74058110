//! Connect Shop CLI library.
//!
//! This crate provides the frontend layer as a library, allowing it to be
//! tested and reused. It plays the role the form controller has in a GUI:
//! request/response calls into the validators, the contact store and the
//! code generator, with the core oblivious to how results are presented.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod autocomplete;
pub mod commands;
pub mod config;
