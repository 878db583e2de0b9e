//! Subcommand implementations.

pub mod list;
pub mod seed;
pub mod shell;
