//! Business logic services for admin.
//!
//! # Services
//!
//! - `auth` - Placeholder credential check and session tracking
//! - `authors` - Author store with write-through persistence
//! - `notifications` - Single transient message with auto-clear
//! - `search` - Case-insensitive author name filter

pub mod auth;
pub mod authors;
pub mod notifications;
pub mod search;

pub use auth::{AuthError, CredentialVerifier, FixedProfiles, SessionManager};
pub use authors::{AuthorStore, StoreError};
pub use notifications::{Notification, NotificationChannel};
