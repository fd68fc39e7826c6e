//! Record Shop Core - Shared types library.
//!
//! This crate provides the domain types used across the record shop
//! components:
//! - `api` - The inventory REST service
//! - `integration-tests` - Black-box tests against the running service
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and the
//!   role/permission table

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
