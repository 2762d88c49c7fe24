use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use repix_model::{Notification, Severity};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// How long a notification stays up when nobody dismisses it.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Shows at most one transient message at a time.
///
/// [`NotificationManager::notify`] replaces whatever is showing and re-arms
/// the expiry timer. The previous timer is aborted first, and every timer
/// checks the sequence id of the notification it was armed for before
/// clearing, so a timer that outlives its message can never take down a
/// newer one. Handles are cheap to clone and share the live notification.
#[derive(Debug, Clone)]
pub struct NotificationManager {
    current: Arc<watch::Sender<Option<Notification>>>,
    timer: Arc<Mutex<Option<JoinHandle<()>>>>,
    sequence: Arc<AtomicU64>,
    ttl: Duration,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_NOTIFICATION_TTL)
    }

    /// A manager with a custom expiry window.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Arc::new(watch::Sender::new(None)),
            timer: Arc::new(Mutex::new(None)),
            sequence: Arc::new(AtomicU64::new(0)),
            ttl,
        }
    }

    /// Replace the current notification and arm its expiry timer.
    ///
    /// Must run inside a Tokio runtime; the timer is a spawned task.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let notification = Notification::new(id, message, severity);
        debug!(id, severity = ?severity, "showing notification");

        self.abort_timer();
        self.current.send_replace(Some(notification));
        let handle = self.spawn_expiry(id);
        *self.lock_timer() = Some(handle);
    }

    /// Clear the current notification, if any, and cancel its timer.
    pub fn dismiss(&self) {
        self.abort_timer();
        self.current.send_replace(None);
    }

    /// The notification currently showing.
    pub fn current(&self) -> Option<Notification> {
        self.current.borrow().clone()
    }

    /// Watch the live notification slot.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.current.subscribe()
    }

    fn spawn_expiry(&self, id: u64) -> JoinHandle<()> {
        let current = self.current.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            // Clear only if this timer's notification is still the one up.
            current.send_if_modified(|slot| match slot {
                Some(notification) if notification.id == id => {
                    *slot = None;
                    true
                }
                _ => false,
            });
        })
    }

    fn abort_timer(&self) {
        if let Some(handle) = self.lock_timer().take() {
            handle.abort();
        }
    }

    fn lock_timer(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
