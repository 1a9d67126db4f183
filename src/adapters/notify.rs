//! Notification sinks
//!
//! Stand-ins for the transient toast messages of the landing page.

use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Error,
}

/// One message for the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Surfaces messages to the operator
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Prints to the terminal: errors on stderr, everything else on stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => {
                tracing::debug!(message = %notification.message, "Error notification");
                eprintln!("❌ {}", notification.message);
            }
            NotificationLevel::Info => {
                tracing::debug!(message = %notification.message, "Info notification");
                println!("✅ {}", notification.message);
            }
        }
    }
}

/// Keeps every notification in memory
///
/// Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemoryNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Messages of error notifications, oldest first
    pub fn errors(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| n.level == NotificationLevel::Error)
            .map(|n| n.message)
            .collect()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_shares_buffer_between_clones() {
        let notifier = MemoryNotifier::new();
        let clone = notifier.clone();

        clone.notify(Notification::error("Please select at least one header."));
        notifier.notify(Notification::info("Saved registrations.xlsx"));

        assert_eq!(notifier.notifications().len(), 2);
        assert_eq!(
            notifier.errors(),
            vec!["Please select at least one header.".to_string()]
        );
    }

    #[test]
    fn test_notification_display() {
        assert_eq!(Notification::error("boom").to_string(), "boom");
    }
}
