//! Cart State Store
//!
//! Owns the [`CartState`] and is the only place it is mutated. Every
//! mutation publishes a change event carrying the post-mutation snapshot on
//! a broadcast channel, so observers (the sync service) always see exactly
//! the state they are expected to push, even if further mutations land
//! while a push is in flight.

use crate::shared::{CartState, LineItem, Product, SyncError};
use tokio::sync::{broadcast, RwLock};

/// Capacity of the change-event channel. Events carry full snapshots, so a
/// lagged receiver loses intermediate states, not correctness.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// The observable cart state store.
#[derive(Debug)]
pub struct CartStore {
    state: RwLock<CartState>,
    changes: broadcast::Sender<CartState>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(CartState::new()),
            changes,
        }
    }

    /// Subscribe to change events. Each event is the full cart state as it
    /// stood immediately after the mutation that produced it.
    pub fn subscribe(&self) -> broadcast::Receiver<CartState> {
        self.changes.subscribe()
    }

    /// Clone of the current cart state.
    pub async fn snapshot(&self) -> CartState {
        self.state.read().await.clone()
    }

    /// Add one unit of a product to the cart.
    ///
    /// If the product is absent a new line item with quantity 1 is
    /// appended; otherwise the existing line's quantity and subtotal grow
    /// by one unit. Always succeeds.
    pub async fn add_item(&self, product: &Product) {
        let snapshot = {
            let mut state = self.state.write().await;
            match state
                .items
                .iter_mut()
                .find(|item| item.item_id == product.id)
            {
                Some(item) => {
                    item.quantity += 1;
                    item.total_price += product.price;
                }
                None => state.items.push(LineItem::from_product(product)),
            }
            state.recompute_totals();
            state.clone()
        };
        tracing::debug!(
            item_id = %product.id,
            total_quantity = snapshot.total_quantity,
            "added item to cart"
        );
        self.publish(snapshot);
    }

    /// Remove one unit of an item from the cart.
    ///
    /// A line at quantity 1 is removed entirely; otherwise its quantity and
    /// subtotal shrink by one unit. Returns [`SyncError::NotFound`] when no
    /// line carries `item_id`, leaving the state untouched.
    pub async fn remove_item(&self, item_id: &str) -> Result<(), SyncError> {
        let snapshot = {
            let mut state = self.state.write().await;
            let index = state
                .items
                .iter()
                .position(|item| item.item_id == item_id)
                .ok_or_else(|| SyncError::not_found(item_id))?;
            if state.items[index].quantity == 1 {
                state.items.remove(index);
            } else {
                let item = &mut state.items[index];
                item.quantity -= 1;
                item.total_price -= item.price;
            }
            state.recompute_totals();
            state.clone()
        };
        tracing::debug!(
            item_id = %item_id,
            total_quantity = snapshot.total_quantity,
            "removed item from cart"
        );
        self.publish(snapshot);
        Ok(())
    }

    /// Replace the whole cart, bypassing per-item logic.
    ///
    /// Used once per session to hydrate from the remote store.
    pub async fn replace_all(&self, new_state: CartState) {
        let snapshot = {
            let mut state = self.state.write().await;
            *state = new_state;
            state.clone()
        };
        tracing::debug!(
            total_quantity = snapshot.total_quantity,
            "replaced cart state"
        );
        self.publish(snapshot);
    }

    fn publish(&self, snapshot: CartState) {
        // Err only means nobody is subscribed yet.
        let _ = self.changes.send(snapshot);
    }
}
