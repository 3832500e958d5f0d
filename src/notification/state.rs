use std::time::{Duration, Instant};

/// How long a notification stays visible
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    shown_at: Instant,
}

impl Notification {
    fn new(message: &str, level: NotificationLevel) -> Self {
        Self {
            message: message.to_string(),
            level,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= NOTIFICATION_DURATION
    }
}

/// At most one notification is shown; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationLevel::Info));
    }

    pub fn show_warning(&mut self, message: &str) {
        log::warn!("{}", message);
        self.current = Some(Notification::new(message, NotificationLevel::Warning));
    }

    pub fn show_error(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationLevel::Error));
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    /// Drop the notification once its time is up
    ///
    /// Returns true if one was removed.
    pub fn clear_if_expired(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
