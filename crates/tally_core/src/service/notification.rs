//! Single-slot notification state.
//!
//! # Invariants
//! - At most one notification is active.
//! - `set` replaces any active notification (last write wins).
//! - Nothing expires on its own; only `clear` removes a notification.

use crate::model::notification::Notification;
use log::debug;

/// Holds the currently displayed notification, if any.
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, notification: Notification) {
        let replaced = self.current.replace(notification).is_some();
        debug!("event=notification_set module=service status=ok replaced={replaced}");
    }

    /// Dismisses the active notification. No-op when already clear.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            debug!("event=notification_cleared module=service status=ok");
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::NotificationState;
    use crate::model::notification::Notification;

    #[test]
    fn starts_clear() {
        let state = NotificationState::new();
        assert!(state.current().is_none());
    }

    #[test]
    fn set_replaces_active_notification() {
        let mut state = NotificationState::new();
        state.set(Notification::invalid_input("first"));
        state.set(Notification::invalid_input("second"));
        let message = state.current().map(|n| n.message.as_str());
        assert_eq!(message, Some("second"));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = NotificationState::new();
        state.clear();
        assert!(state.current().is_none());

        state.set(Notification::new("Oops", "bad"));
        state.clear();
        state.clear();
        assert!(state.current().is_none());
    }
}
