//! Notifier adapters.

use super::{
    domain::{Notification, NotificationLevel},
    ports::Notifier,
};
use std::sync::{Arc, RwLock};

/// Notifier that emits each notification as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let title = notification.title();
        let message = notification.message();
        match notification.level() {
            NotificationLevel::Info | NotificationLevel::Success => {
                tracing::info!(title, message, level = %notification.level(), "notification");
            }
            NotificationLevel::Warning => tracing::warn!(title, message, "notification"),
            NotificationLevel::Error => tracing::error!(title, message, "notification"),
        }
    }
}

/// Notifier that keeps every notification in memory.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifier {
    log: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotifier {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notifications published so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.log
            .read()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    /// Removes and returns the notifications published so far.
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        self.log
            .write()
            .map(|mut log| std::mem::take(&mut *log))
            .unwrap_or_default()
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut log) = self.log.write() {
            log.push(notification);
        }
    }
}
