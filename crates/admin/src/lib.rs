//! Author Desk admin library.
//!
//! Everything behind the front-ends: session handling, view routing, the
//! author store and its persistence, transient notifications and the text
//! screens. [`state::App`] ties them together.
//!
//! # Security
//!
//! The login check compares against two fixed profiles and is not a real
//! access control mechanism. See [`services::auth`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use state::{App, messages};
