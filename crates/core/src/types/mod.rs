//! Core types for Author Desk.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod author;
pub mod id;
pub mod role;

pub use author::{Author, AuthorDraft};
pub use id::*;
pub use role::Role;
