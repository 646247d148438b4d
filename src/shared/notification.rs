//! UI Notification Types
//!
//! A notification is a transient status record describing the outcome of a
//! background sync operation. There is only ever one current notification;
//! each new one overwrites the last (see [`NotificationSlot`](crate::ui::NotificationSlot)).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of the most recent background operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Request issued, response not yet received
    Pending,
    /// Request completed successfully
    Success,
    /// Request failed or its response was malformed
    Error,
}

/// A transient status record surfaced to the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Outcome category
    pub status: NotificationKind,
    /// Short heading, e.g. "Sending..."
    pub title: String,
    /// Longer detail line
    pub message: String,
    /// When the notification was emitted
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// Create a new notification stamped with the current time.
    pub fn new(
        status: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a pending notification.
    pub fn pending(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Pending, title, message)
    }

    /// Create a success notification.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, message)
    }

    /// Create an error notification.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }
}
