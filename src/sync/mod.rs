//! # Cart Sync Service
//!
//! Keeps the remotely stored cart document consistent with local mutations
//! and surfaces operation status to the UI.
//!
//! ## Architecture
//!
//! The service coordinates three collaborators:
//! - **Cart store**: publishes a change event per mutation
//! - **Gateway**: GET/PUT of the cart document
//! - **Notification slot**: single current status record for the UI
//!
//! ## Flow
//!
//! On `start` the service subscribes to the store, spawns a background
//! observer task, and then hydrates local state from the remote document
//! once. The hydration `replace_all` is itself a store change, so the very
//! first observed event is swallowed by a one-shot marker instead of being
//! echoed back to the remote store. Every later change spawns a detached
//! push: pending notification, PUT of the full snapshot, then a success or
//! error notification. Pushes are fire-and-forget; rapid successive
//! mutations can overlap in flight and the last response wins. Failures are
//! terminal for their operation, there is no retry.

pub mod metrics;

use crate::gateway::CartGateway;
use crate::shared::{CartState, Notification};
use crate::store::CartStore;
use crate::ui::NotificationSlot;
use metrics::SyncMetrics;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Background cart synchronization service.
pub struct SyncService {
    store: Arc<CartStore>,
    gateway: Arc<dyn CartGateway>,
    notifications: NotificationSlot,
    metrics: Arc<RwLock<SyncMetrics>>,
    /// True until the first store change has been observed this session.
    first_observation: Arc<AtomicBool>,
    observer_task: Option<tokio::task::JoinHandle<()>>,
}

impl SyncService {
    /// Create a service over a store and gateway. Nothing runs until
    /// [`start`](Self::start).
    pub fn new(store: Arc<CartStore>, gateway: Arc<dyn CartGateway>) -> Self {
        Self {
            store,
            gateway,
            notifications: NotificationSlot::new(),
            metrics: Arc::new(RwLock::new(SyncMetrics::new())),
            first_observation: Arc::new(AtomicBool::new(true)),
            observer_task: None,
        }
    }

    /// The notification slot this service writes to. Clones share the slot.
    pub fn notifications(&self) -> NotificationSlot {
        self.notifications.clone()
    }

    /// Snapshot of the current sync counters.
    pub async fn metrics(&self) -> SyncMetrics {
        self.metrics.read().await.clone()
    }

    /// Whether the background observer is running.
    pub fn is_running(&self) -> bool {
        self.observer_task.is_some()
    }

    /// Subscribe to the store, spawn the observer task, then hydrate local
    /// state from the remote document.
    ///
    /// Subscription happens before hydration so the `replace_all` event is
    /// the one the first-observation marker consumes.
    pub async fn start(&mut self) {
        if self.observer_task.is_some() {
            tracing::warn!("sync service already running");
            return;
        }

        let rx = self.store.subscribe();
        let gateway = Arc::clone(&self.gateway);
        let notifications = self.notifications.clone();
        let metrics = Arc::clone(&self.metrics);
        let first_observation = Arc::clone(&self.first_observation);

        let handle = tokio::spawn(async move {
            Self::observe_changes(rx, gateway, notifications, metrics, first_observation).await;
        });
        self.observer_task = Some(handle);

        self.hydrate().await;
    }

    /// Stop the background observer. In-flight pushes finish on their own.
    pub fn stop(&mut self) {
        if let Some(handle) = self.observer_task.take() {
            handle.abort();
        }
    }

    /// Pull the remote cart once and replace local state with it.
    ///
    /// Silent on success; a never-written document hydrates to the empty
    /// cart. On failure the local state stays as it was and an error
    /// notification is emitted.
    pub async fn hydrate(&self) {
        match self.gateway.fetch_cart().await {
            Ok(remote) => {
                let cart = remote.unwrap_or_default();
                tracing::info!(
                    total_quantity = cart.total_quantity,
                    "hydrated cart from remote store"
                );
                self.store.replace_all(cart).await;
                self.metrics.write().await.record_pull_success();
            }
            Err(e) => {
                tracing::error!("failed to fetch cart data: {}", e);
                self.metrics.write().await.record_pull_failure();
                self.notifications
                    .emit(Notification::error("Error!", "Fetching cart data failed!"))
                    .await;
            }
        }
    }

    /// Background loop: one detached push per observed change, except the
    /// first observation of the session.
    async fn observe_changes(
        mut rx: broadcast::Receiver<CartState>,
        gateway: Arc<dyn CartGateway>,
        notifications: NotificationSlot,
        metrics: Arc<RwLock<SyncMetrics>>,
        first_observation: Arc<AtomicBool>,
    ) {
        loop {
            match rx.recv().await {
                Ok(snapshot) => {
                    if first_observation.swap(false, Ordering::SeqCst) {
                        tracing::debug!("skipping push for initial cart state");
                        continue;
                    }
                    let gateway = Arc::clone(&gateway);
                    let notifications = notifications.clone();
                    let metrics = Arc::clone(&metrics);
                    tokio::spawn(async move {
                        Self::push(gateway, snapshot, notifications, metrics).await;
                    });
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "change observer lagged, skipping stale snapshots");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::debug!("cart store dropped, stopping change observer");
                    break;
                }
            }
        }
    }

    /// Write one snapshot to the gateway, bracketed by notifications.
    async fn push(
        gateway: Arc<dyn CartGateway>,
        snapshot: CartState,
        notifications: NotificationSlot,
        metrics: Arc<RwLock<SyncMetrics>>,
    ) {
        metrics.write().await.record_push_start();
        notifications
            .emit(Notification::pending("Sending...", "Sending cart data..."))
            .await;

        match gateway.store_cart(&snapshot).await {
            Ok(()) => {
                metrics.write().await.record_push_success();
                notifications
                    .emit(Notification::success("Success", "Sent cart data successfully"))
                    .await;
            }
            Err(e) => {
                tracing::error!("failed to send cart data: {}", e);
                metrics.write().await.record_push_failure();
                notifications
                    .emit(Notification::error("Error!", "Sending cart data failed"))
                    .await;
            }
        }
    }
}

impl Drop for SyncService {
    fn drop(&mut self) {
        if let Some(handle) = self.observer_task.take() {
            handle.abort();
        }
    }
}
