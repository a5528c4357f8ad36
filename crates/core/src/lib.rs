//! StoreDesk Core - Shared types library.
//!
//! This crate provides the types used across all StoreDesk components:
//! - `client` - REST client for the store backend
//! - `cli` - Command-line front end driving the client
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no token storage. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Request payloads, result types, and validated newtypes
//! - [`validation`] - Form-level checks run before a request is submitted

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::{FieldError, ValidationErrors};
