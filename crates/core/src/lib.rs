//! Author Desk Core - Shared types library.
//!
//! This crate provides common types used across all Author Desk components:
//! - `admin` - Record store, session, routing and rendering
//! - `cli` - Console shell and management commands
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no timers.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, author records, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
