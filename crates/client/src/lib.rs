//! StoreDesk Client - REST access layer for the store-management backend.
//!
//! [`RemoteStoreClient`] translates typed local intents ("log in", "update
//! company info", "add FAQ") into single HTTP requests against one configured
//! base URL, and translates the replies back into the result types from
//! `storedesk-core`.
//!
//! # Architecture
//!
//! - One round trip per operation. No retry, caching, timeout or cancellation
//!   is layered on top of what `reqwest` does by default.
//! - The bearer token lives behind the [`TokenStore`] trait and is read fresh
//!   on every authenticated call, so a replaced or revoked token takes effect
//!   on the next request.
//! - Backend replies are parsed into `serde_json::Value` and reshaped by one
//!   small pure mapping function per endpoint. The backend's envelopes are
//!   inconsistent, so each mapping keeps its own fallback paths.
//! - Errors prefer the backend's `message` field and otherwise use a fixed
//!   per-operation fallback (see [`StoreApiError`]).
//!
//! # Modules
//!
//! - [`auth`] - Sign-up, login, password reset, two-factor
//! - [`settings`] - Shop, company, domain, policy, social, FAQ, security
//! - [`token`] - Persisted bearer token storage
//! - [`config`] - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
mod client;
pub mod config;
mod endpoints;
mod envelope;
pub mod error;
pub mod settings;
pub mod token;

pub use client::RemoteStoreClient;
pub use config::{ClientConfig, ConfigError};
pub use error::StoreApiError;
pub use token::{FileTokenStore, MemoryTokenStore, TOKEN_KEY, TokenStore, TokenStoreError};
