use crate::domain::NotificationKind;

/// Port for transient user-visible feedback.
pub trait NotificationPort: Send + Sync {
    /// Shows `message`, replacing whatever is currently shown.
    fn notify(&self, message: &str, kind: NotificationKind);
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    pub struct MockNotificationPort {
        pub notifications: Arc<Mutex<Vec<(String, NotificationKind)>>>,
    }

    impl MockNotificationPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn messages(&self) -> Vec<(String, NotificationKind)> {
            self.notifications.lock().unwrap().clone()
        }
    }

    impl NotificationPort for MockNotificationPort {
        fn notify(&self, message: &str, kind: NotificationKind) {
            self.notifications
                .lock()
                .unwrap()
                .push((message.to_string(), kind));
        }
    }
}
