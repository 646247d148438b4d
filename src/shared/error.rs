//! Shared Error Types
//!
//! This module defines the error taxonomy for cart operations and remote
//! synchronization.
//!
//! # Error Categories
//!
//! - `NotFound` - a removal was requested for an item ID absent from the cart
//! - `Transport` - a push or pull request could not complete, or returned a
//!   non-success status
//! - `Decode` - a pull response body could not be parsed into the expected
//!   cart shape
//!
//! All three are caught at the sync service boundary and converted into a
//! user-visible notification; none propagate further or crash the
//! application.
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across task
//! boundaries.
use thiserror::Error;

/// Errors that can occur while mutating the cart or syncing it remotely.
#[derive(Debug, Error, Clone)]
pub enum SyncError {
    /// Removal requested for an item ID that is not in the cart
    #[error("item '{item_id}' is not in the cart")]
    NotFound {
        /// The missing item ID
        item_id: String,
    },

    /// Request failed to complete or returned a non-success status
    #[error("transport error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
    },

    /// Response body could not be parsed into the expected shape
    #[error("decode error: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },
}

impl SyncError {
    /// Create a new not-found error.
    pub fn not_found(item_id: impl Into<String>) -> Self {
        Self::NotFound {
            item_id: item_id.into(),
        }
    }

    /// Create a new transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = SyncError::not_found("p9");
        match error {
            SyncError::NotFound { item_id } => assert_eq!(item_id, "p9"),
            _ => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = SyncError::transport("connection refused");
        let display = format!("{}", error);
        assert!(display.contains("transport error"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid json }");
        let sync_error: SyncError = result.unwrap_err().into();
        match sync_error {
            SyncError::Decode { .. } => {}
            _ => panic!("Expected Decode from serde error"),
        }
    }

    #[test]
    fn test_error_clone() {
        let error = SyncError::not_found("p1");
        let cloned = error.clone();
        assert_eq!(format!("{}", error), format!("{}", cloned));
    }
}
