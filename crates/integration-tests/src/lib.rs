//! Integration tests for Author Desk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p author-desk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `admin_scenarios` - End-to-end flows through `App`
//! - `persistence` - File-backed storage across restarts
//! - `notifications` - Notification lifetime under a paused clock
//!
//! The helpers below build apps over shared slots so a test can inspect
//! what was persisted.

use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;

use author_desk_admin::App;
use author_desk_admin::config::AdminConfig;
use author_desk_admin::db::{AuthorRepository, MemorySlot};
use author_desk_admin::services::{AuthorStore, NotificationChannel};

/// Build an app over `slot` with the default notification lifetime.
#[must_use]
pub fn memory_app(slot: &MemorySlot) -> App {
    let store = AuthorStore::open(AuthorRepository::new(slot.clone()));
    App::new(store, NotificationChannel::default())
}

/// Build an app the way the shell does, over a file slot in `dir`.
#[must_use]
pub fn file_app(dir: &Path, notification_ttl: Duration) -> App {
    App::open(&AdminConfig {
        data_dir: dir.to_path_buf(),
        notification_ttl,
        log_json: false,
    })
}

/// Wrap a password literal.
#[must_use]
pub fn secret(password: &str) -> SecretString {
    SecretString::from(password)
}
