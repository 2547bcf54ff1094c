//! User-facing toast notifications
//!
//! The controller never talks to a screen. It hands finished notifications to
//! a [`Notifier`]; the TUI queues them as toasts, the CLI prints them.

use std::time::{Duration, Instant};

/// How long the success toast stays up
pub const SUCCESS_DURATION: Duration = Duration::from_millis(5_000);

/// How long the failure toast stays up
pub const FAILURE_DURATION: Duration = Duration::from_millis(600_000);

const SUCCESS_TITLE: &str = "Pré-Inscrição realizada com sucesso!";
const SUCCESS_DESCRIPTION: &str = "Sua pré-inscrição para o curso de teologia foi recebida.";
const FAILURE_TITLE: &str = "Erro ao realizar pré-inscrição.";

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The registration reached the endpoint
    Success,
    /// The registration may not have been recorded
    Error,
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// Headline
    pub title: String,
    /// Body text
    pub description: String,
    /// Type of notification
    pub kind: NotificationKind,
    /// Display duration
    pub duration: Duration,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: Instant,
}

impl Notification {
    /// Create a new notification
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        kind: NotificationKind,
        duration: Duration,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
            duration,
            created_at: Instant::now(),
        }
    }

    /// The fixed "registration received" toast
    pub fn submission_succeeded() -> Self {
        Self::new(
            SUCCESS_TITLE,
            SUCCESS_DESCRIPTION,
            NotificationKind::Success,
            SUCCESS_DURATION,
        )
    }

    /// The fixed failure toast, pointing the applicant at `support_contact`
    pub fn submission_failed(support_contact: &str) -> Self {
        Self::new(
            FAILURE_TITLE,
            support_contact,
            NotificationKind::Error,
            FAILURE_DURATION,
        )
    }

    /// Display duration in milliseconds
    pub fn duration_ms(&self) -> u128 {
        self.duration.as_millis()
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Get remaining time as a fraction (0.0 to 1.0)
    pub fn remaining_fraction(&self) -> f64 {
        let elapsed = self.created_at.elapsed().as_secs_f64();
        let total = self.duration.as_secs_f64();
        if total == 0.0 {
            return 0.0;
        }
        (1.0 - elapsed / total).clamp(0.0, 1.0)
    }
}

/// Presents notifications to the applicant
pub trait Notifier {
    /// Show `notification`
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// A queue of notifications to display
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    /// Create a new notification queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Dismiss the notification currently shown
    pub fn dismiss_current(&mut self) {
        if !self.notifications.is_empty() {
            self.notifications.remove(0);
        }
    }

    /// Get the current notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Get the number of notifications
    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
