//! Authenticated store-settings operations.
//!
//! Every operation here attaches `Authorization: Bearer <token>` read from
//! the token store at call time. Reads unwrap the backend envelope with a
//! per-endpoint mapping function; mutations return the backend's message.
//!
//! - [`shop`] - Shop summary, company info, business registration
//! - [`domain`] - Custom domain
//! - [`policies`] - Privacy, return and terms documents
//! - [`social`] - Social media links
//! - [`faq`] - FAQ list and CRUD
//! - [`security`] - Account security settings

pub mod domain;
pub mod faq;
pub mod policies;
pub mod security;
pub mod shop;
pub mod social;
