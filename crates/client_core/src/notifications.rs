//! Process-wide notification queue.
//!
//! The center is created once at start-up and handed to whoever needs to
//! notify the user. Every pushed notification is shown immediately and
//! dismissed on its own after the configured lifetime.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use shared::domain::NotificationKind;
use tokio::sync::broadcast;
use tracing::{debug, warn};
use uuid::Uuid;

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(3000);
const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    Shown(Notification),
    Dismissed(Uuid),
}

pub trait NotificationSink: Send + Sync {
    fn push(&self, notification: Notification);
}

struct Inner {
    active: Mutex<Vec<Notification>>,
    events: broadcast::Sender<NotificationEvent>,
    ttl: Duration,
}

#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl NotificationCenter {
    pub fn init(ttl: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                active: Mutex::new(Vec::new()),
                events,
                ttl,
            }),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.inner.events.subscribe()
    }

    pub fn active(&self) -> Vec<Notification> {
        self.lock_active().clone()
    }

    /// Removes a notification early. Returns false if it was already gone.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let removed = {
            let mut active = self.lock_active();
            let before = active.len();
            active.retain(|notification| notification.id != id);
            active.len() != before
        };
        if removed {
            // no subscribers is fine
            let _ = self.inner.events.send(NotificationEvent::Dismissed(id));
        }
        removed
    }

    fn lock_active(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.inner
            .active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn schedule_expiry(&self, id: Uuid) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(%id, "no async runtime; notification will not expire on its own");
            return;
        };
        let center = self.clone();
        let ttl = self.inner.ttl;
        runtime.spawn(async move {
            tokio::time::sleep(ttl).await;
            if center.dismiss(id) {
                debug!(%id, "notification expired");
            }
        });
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::init(DEFAULT_NOTIFICATION_TTL)
    }
}

impl NotificationSink for NotificationCenter {
    fn push(&self, notification: Notification) {
        let id = notification.id;
        self.lock_active().push(notification.clone());
        let _ = self.inner.events.send(NotificationEvent::Shown(notification));
        self.schedule_expiry(id);
    }
}

#[cfg(test)]
#[path = "tests/notifications_tests.rs"]
mod tests;
