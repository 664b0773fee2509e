use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::notification::NOTIFICATION_DURATION;
use crate::domain::ports::NotificationPort;
use crate::domain::{Notification, NotificationKind};

/// Single shared notification slot.
///
/// A new notification replaces the current one and starts its own dismissal
/// window, so rapid calls keep the latest message up for the full duration.
#[derive(Debug, Clone)]
pub struct NotificationService {
    slot: Arc<Mutex<Option<Notification>>>,
    duration: Duration,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(NOTIFICATION_DURATION)
    }
}

impl NotificationService {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            duration,
        }
    }

    /// Visible notification, if any.
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.current_at(Instant::now())
    }

    #[must_use]
    pub fn current_at(&self, now: Instant) -> Option<Notification> {
        self.slot
            .lock()
            .as_ref()
            .filter(|n| !n.is_expired_at(now))
            .cloned()
    }

    /// Dismisses the current notification once its window has passed.
    /// Returns whether something was dismissed.
    pub fn tick(&self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&self, now: Instant) -> bool {
        let mut slot = self.slot.lock();
        if slot.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            *slot = None;
            return true;
        }
        false
    }

    fn show(&self, kind: NotificationKind, message: String) {
        debug!(?kind, %message, "Showing notification");
        let notification = Notification::new(kind, message).with_duration(self.duration);
        *self.slot.lock() = Some(notification);
    }
}

impl NotificationPort for NotificationService {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.show(kind, message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_flow() {
        let service = NotificationService::default();
        assert!(service.current().is_none());

        service.notify("Opened Netflix", NotificationKind::Success);
        let current = service.current().unwrap();
        assert_eq!(current.message, "Opened Netflix");
        assert_eq!(current.kind, NotificationKind::Success);
    }

    #[test]
    fn test_new_notification_replaces_current() {
        let service = NotificationService::default();
        service.notify("first", NotificationKind::Success);
        service.notify("second", NotificationKind::Error);

        let current = service.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NotificationKind::Error);
    }

    #[test]
    fn test_dismissal_window_restarts_on_replace() {
        let service = NotificationService::default();
        service.notify("first", NotificationKind::Success);
        let first_shown = service.current().unwrap().shown_at;

        service.slot.lock().as_mut().unwrap().shown_at = first_shown
            .checked_sub(Duration::from_millis(2500))
            .unwrap();
        service.notify("second", NotificationKind::Success);
        let second = service.current().unwrap();

        let almost = second.shown_at + Duration::from_millis(2999);
        assert!(!service.tick_at(almost));
        assert_eq!(service.current_at(almost).unwrap().message, "second");

        let after = second.shown_at + Duration::from_millis(3000);
        assert!(service.current_at(after).is_none());
        assert!(service.tick_at(after));
        assert!(!service.tick_at(after));
    }

    #[test]
    fn test_clones_share_slot() {
        let service = NotificationService::default();
        let handle = service.clone();
        handle.notify("Error: boom", NotificationKind::Error);
        assert_eq!(service.current().unwrap().message, "Error: boom");
    }
}
