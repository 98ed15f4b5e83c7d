// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! Notifications are kept in arrival order. The first [`MAX_VISIBLE`] are on
//! screen; the rest wait. A notification's display timer starts when it
//! becomes visible, not when it is pushed.

use super::notification::{Notification, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of toasts on screen at once.
pub const MAX_VISIBLE: usize = 3;

/// Identifies one pushed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug)]
struct Entry {
    id: NotificationId,
    notification: Notification,
    shown_at: Option<Instant>,
}

impl Entry {
    fn is_expired_at(&self, now: Instant) -> bool {
        match (self.shown_at, self.notification.severity().display_time()) {
            (Some(shown_at), Some(display_time)) => {
                now.saturating_duration_since(shown_at) >= display_time
            }
            _ => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct Manager {
    entries: VecDeque<Entry>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `notification`, or restarts the timer of an identical one that
    /// is already pending so repeated notices do not stack up.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        self.push_at(notification, Instant::now())
    }

    fn push_at(&mut self, notification: Notification, now: Instant) -> NotificationId {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.notification == notification)
        {
            if entry.shown_at.is_some() {
                entry.shown_at = Some(now);
            }
            return entry.id;
        }

        let key = notification.message_key();
        match notification.severity() {
            Severity::Info => log::info!("Notification: {key}"),
            Severity::Warning => log::warn!("Notification: {key}"),
            Severity::Error => log::error!("Notification: {key}"),
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.entries.push_back(Entry {
            id,
            notification,
            shown_at: None,
        });
        self.show_pending(now);
        id
    }

    /// Removes a notification. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.show_pending(Instant::now());
        self.entries.len() != before
    }

    /// Drops visible notifications whose display time has run out at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.entries.retain(|entry| !entry.is_expired_at(now));
        self.show_pending(now);
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Notifications on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = (NotificationId, &Notification)> {
        self.entries
            .iter()
            .take(MAX_VISIBLE)
            .map(|entry| (entry.id, &entry.notification))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.len().min(MAX_VISIBLE)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.entries.len().saturating_sub(MAX_VISIBLE)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    fn show_pending(&mut self, now: Instant) {
        for entry in self.entries.iter_mut().take(MAX_VISIBLE) {
            entry.shown_at.get_or_insert(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn keys(manager: &Manager) -> Vec<&str> {
        manager.visible().map(|(_, n)| n.message_key()).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn overflow_waits_in_arrival_order() {
        let mut manager = Manager::new();
        for i in 0..=MAX_VISIBLE {
            manager.push(Notification::info(format!("info-{i}")));
        }

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
        assert_eq!(keys(&manager), ["info-0", "info-1", "info-2"]);
    }

    #[test]
    fn dismiss_reveals_the_next_waiting_notification() {
        let mut manager = Manager::new();
        let first = manager.push(Notification::error("error-0"));
        for i in 1..=MAX_VISIBLE {
            manager.push(Notification::error(format!("error-{i}")));
        }

        manager.handle_message(&Message::Dismiss(first));

        assert_eq!(manager.queued_count(), 0);
        assert_eq!(keys(&manager), ["error-1", "error-2", "error-3"]);
        assert!(!manager.dismiss(first));
    }

    #[test]
    fn identical_notice_is_not_stacked() {
        let mut manager = Manager::new();
        let a = manager.push(Notification::warning("notification-analysis-disabled"));
        let b = manager.push(Notification::warning("notification-analysis-disabled"));

        assert_eq!(a, b);
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn repush_restarts_the_display_timer() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let notice = Notification::warning("notification-analysis-disabled");
        manager.push_at(notice.clone(), start);
        manager.push_at(notice, start + Duration::from_secs(4));

        manager.tick(start + Duration::from_secs(6));
        assert_eq!(manager.visible_count(), 1);

        manager.tick(start + Duration::from_secs(9));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_expires_warnings_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-config-load-error"));
        manager.push(Notification::error("notification-invalid-endpoint"));

        manager.tick(Instant::now() + Duration::from_secs(10));

        assert_eq!(keys(&manager), ["notification-invalid-endpoint"]);
    }

    #[test]
    fn queued_timer_starts_when_shown() {
        let mut manager = Manager::new();
        let start = Instant::now();
        for i in 0..MAX_VISIBLE {
            manager.push_at(Notification::error(format!("error-{i}")), start);
        }
        manager.push_at(Notification::info("late"), start);

        // Waiting far longer than the info display time does not expire it.
        let later = start + Duration::from_secs(60);
        manager.tick(later);
        assert_eq!(manager.queued_count(), 1);

        let visible: Vec<NotificationId> = manager.visible().map(|(id, _)| id).collect();
        manager.dismiss(visible[0]);
        manager.tick(Instant::now());
        assert!(keys(&manager).contains(&"late"));
    }
}
