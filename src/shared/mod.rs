//! Shared Module
//!
//! This module contains the data types exchanged between the cart store, the
//! sync service, and the remote document store. All types are designed for
//! serialization and transmission over HTTP.

/// Cart data structures
pub mod cart;

/// UI notification types
pub mod notification;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use cart::{CartState, LineItem, Product};
pub use error::SyncError;
pub use notification::{Notification, NotificationKind};
