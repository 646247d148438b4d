//! Shared test helpers
//!
//! In-memory gateway implementations used by the integration tests, so the
//! sync flow can be exercised without a network.

use async_trait::async_trait;
use cartsync::gateway::CartGateway;
use cartsync::shared::{CartState, LineItem, Product, SyncError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Straightforward in-memory document store.
#[derive(Default)]
pub struct MemoryGateway {
    pub remote: Mutex<Option<CartState>>,
    pub puts: Mutex<Vec<CartState>>,
    pub fail_fetch: AtomicBool,
    pub fail_puts: AtomicBool,
}

impl MemoryGateway {
    pub fn with_remote(cart: CartState) -> Self {
        Self {
            remote: Mutex::new(Some(cart)),
            ..Self::default()
        }
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }

    pub fn last_put(&self) -> Option<CartState> {
        self.puts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CartGateway for MemoryGateway {
    async fn fetch_cart(&self) -> Result<Option<CartState>, SyncError> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(SyncError::transport("connection refused"));
        }
        Ok(self.remote.lock().unwrap().clone())
    }

    async fn store_cart(&self, cart: &CartState) -> Result<(), SyncError> {
        self.puts.lock().unwrap().push(cart.clone());
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(SyncError::transport("connection reset"));
        }
        *self.remote.lock().unwrap() = Some(cart.clone());
        Ok(())
    }
}

/// Gateway whose puts block until the test releases them, for observing
/// in-flight pushes.
pub struct GatedGateway {
    pub remote: Mutex<Option<CartState>>,
    pub puts: Mutex<Vec<CartState>>,
    pub puts_started: AtomicUsize,
    release: Semaphore,
}

impl Default for GatedGateway {
    fn default() -> Self {
        Self {
            remote: Mutex::default(),
            puts: Mutex::default(),
            puts_started: AtomicUsize::default(),
            release: Semaphore::new(0),
        }
    }
}

impl GatedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow `n` blocked puts to complete.
    pub fn release(&self, n: usize) {
        self.release.add_permits(n);
    }

    pub fn started(&self) -> usize {
        self.puts_started.load(Ordering::SeqCst)
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }
}

#[async_trait]
impl CartGateway for GatedGateway {
    async fn fetch_cart(&self) -> Result<Option<CartState>, SyncError> {
        Ok(self.remote.lock().unwrap().clone())
    }

    async fn store_cart(&self, cart: &CartState) -> Result<(), SyncError> {
        self.puts_started.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .release
            .acquire()
            .await
            .map_err(|_| SyncError::transport("gate closed"))?;
        permit.forget();
        self.puts.lock().unwrap().push(cart.clone());
        *self.remote.lock().unwrap() = Some(cart.clone());
        Ok(())
    }
}

/// Poll `condition` until it holds, or panic after ~1s.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached in time");
}

/// A cart holding `quantity` units of the demo catalog's car.
pub fn buggati_cart(quantity: u32) -> CartState {
    let mut cart = CartState::new();
    cart.items.push(LineItem {
        item_id: "p1".into(),
        name: "buggati".into(),
        price: 6.0,
        quantity,
        total_price: 6.0 * quantity as f64,
    });
    cart.recompute_totals();
    cart
}

pub fn buggati() -> Product {
    Product::new("p1", "buggati", 6.0)
}
