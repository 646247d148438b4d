//! CartSync - Main Library
//!
//! CartSync is a client-side shopping cart library that keeps local cart
//! state synchronized with a remote document store over HTTP.
//!
//! # Overview
//!
//! This library provides the core functionality for a cart-backed shop
//! client, including:
//! - An observable cart state store with derived totals
//! - A background sync service pushing mutations to the remote store
//! - One-time hydration of local state from the remote document at startup
//! - Transient UI notifications reflecting request status
//!
//! # Module Structure
//!
//! - **`shared`** - Serializable data types: cart model, notifications,
//!   errors
//! - **`store`** - The cart state store and its change events
//! - **`gateway`** - The remote document store client (reqwest GET/PUT)
//! - **`sync`** - The synchronization service and its metrics
//! - **`ui`** - UI-observable state: notification slot, cart visibility
//! - **`config`** - Remote store configuration
//!
//! # Usage
//!
//! ```rust,no_run
//! use cartsync::config::Config;
//! use cartsync::gateway::HttpGateway;
//! use cartsync::shared::Product;
//! use cartsync::store::CartStore;
//! use cartsync::sync::SyncService;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let config = Config::new();
//! let store = Arc::new(CartStore::new());
//! let gateway = Arc::new(HttpGateway::new(config));
//!
//! let mut sync = SyncService::new(Arc::clone(&store), gateway);
//! sync.start().await;
//!
//! store.add_item(&Product::new("p1", "buggati", 6.0)).await;
//! # }
//! ```

pub mod config;
pub mod gateway;
pub mod shared;
pub mod store;
pub mod sync;
pub mod ui;

pub use config::Config;
pub use gateway::{CartGateway, HttpGateway};
pub use shared::{CartState, LineItem, Notification, NotificationKind, Product, SyncError};
pub use store::CartStore;
pub use sync::SyncService;
pub use ui::{NotificationSlot, UiState};
