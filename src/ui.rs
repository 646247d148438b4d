//! UI-Observable State
//!
//! What the presentation layer reads: the single-slot notification holder
//! and the cart panel visibility flag. Neither carries any sync logic.

use crate::shared::Notification;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Single-slot holder for the current notification.
///
/// Each emit overwrites the previous value atomically; consumers only ever
/// read the latest one. There is no queue or history. Clones share the same
/// slot, so the sync service and the UI can hold it independently.
#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    current: Arc<RwLock<Option<Notification>>>,
}

impl NotificationSlot {
    /// Create an empty slot (no operation has occurred yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot with a new notification.
    pub async fn emit(&self, notification: Notification) {
        tracing::info!(
            status = ?notification.status,
            title = %notification.title,
            "{}",
            notification.message
        );
        *self.current.write().await = Some(notification);
    }

    /// Clone of the latest notification, if any.
    pub async fn latest(&self) -> Option<Notification> {
        self.current.read().await.clone()
    }

    /// Clear the slot (e.g. after the UI has shown the notification).
    pub async fn clear(&self) {
        *self.current.write().await = None;
    }
}

/// Presentation-layer flags.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Whether the cart panel is shown
    pub cart_visible: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the cart panel visibility.
    pub fn toggle_cart(&mut self) {
        self.cart_visible = !self.cart_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::NotificationKind;

    #[tokio::test]
    async fn test_slot_starts_empty() {
        let slot = NotificationSlot::new();
        assert!(slot.latest().await.is_none());
    }

    #[tokio::test]
    async fn test_emit_overwrites_previous() {
        let slot = NotificationSlot::new();
        slot.emit(Notification::pending("Sending...", "Sending cart data..."))
            .await;
        slot.emit(Notification::success("Success", "Sent cart data successfully"))
            .await;

        let latest = slot.latest().await.unwrap();
        assert_eq!(latest.status, NotificationKind::Success);
        assert_eq!(latest.title, "Success");
    }

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let slot = NotificationSlot::new();
        let other = slot.clone();
        other
            .emit(Notification::error("Error!", "Sending cart data failed"))
            .await;
        assert_eq!(
            slot.latest().await.unwrap().status,
            NotificationKind::Error
        );
    }

    #[test]
    fn test_toggle_cart() {
        let mut ui = UiState::new();
        assert!(!ui.cart_visible);
        ui.toggle_cart();
        assert!(ui.cart_visible);
        ui.toggle_cart();
        assert!(!ui.cart_visible);
    }
}
