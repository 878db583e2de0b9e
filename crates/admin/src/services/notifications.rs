//! Transient user-facing notifications.
//!
//! At most one notification is active. Each one starts a countdown task on
//! the Tokio runtime; a newer notification (or an explicit clear) aborts the
//! pending countdown. Every countdown also carries the generation it was
//! started for and only clears that generation, so a countdown that already
//! woke up can never clear a newer message.
//!
//! Outside a Tokio runtime no countdown is started. The message then
//! disappears on the first read after its `expires_at`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default lifetime of a notification.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3);

/// A message shown to the user until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    /// Wall-clock time the countdown ends; `None` if it cannot be represented.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Whether the notification has expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

#[derive(Debug, Default)]
struct Slot {
    current: Option<Notification>,
    generation: u64,
}

/// Single-slot notification channel with auto-clear.
#[derive(Debug)]
pub struct NotificationChannel {
    ttl: Duration,
    slot: Arc<Mutex<Slot>>,
    pending: Option<JoinHandle<()>>,
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl NotificationChannel {
    /// Create an empty channel whose notifications live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Arc::new(Mutex::new(Slot::default())),
            pending: None,
        }
    }

    /// Lifetime of each notification.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Show `text`, replacing any active notification and restarting the countdown.
    ///
    /// The countdown task runs on the current Tokio runtime, if there is one.
    pub fn notify(&mut self, text: impl Into<String>) {
        let text = text.into();
        let expires_at = chrono::Duration::from_std(self.ttl)
            .ok()
            .and_then(|ttl| Utc::now().checked_add_signed(ttl));

        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation = slot.generation.wrapping_add(1);
            slot.current = Some(Notification { text, expires_at });
            slot.generation
        };

        self.cancel_pending();

        let Ok(runtime) = Handle::try_current() else {
            debug!(generation, "No runtime, notification expires on read");
            return;
        };

        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = lock(&slot);
            if slot.generation == generation {
                slot.current = None;
                debug!(generation, "Notification expired");
            }
        }));
    }

    /// Remove the active notification and cancel its countdown.
    pub fn clear(&mut self) {
        self.cancel_pending();
        let mut slot = lock(&self.slot);
        slot.generation = slot.generation.wrapping_add(1);
        slot.current = None;
    }

    /// The active notification, if any.
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        let now = Utc::now();
        lock(&self.slot)
            .current
            .clone()
            .filter(|n| !n.is_expired(now))
    }

    /// Text of the active notification, if any.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.current().map(|n| n.text)
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for NotificationChannel {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
