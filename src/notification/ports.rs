//! Notification delivery port.

use super::domain::Notification;

/// Delivers notifications to the user.
///
/// Delivery is best effort; implementations must not fail the caller.
pub trait Notifier: Send + Sync {
    /// Publishes a notification.
    fn notify(&self, notification: Notification);
}
