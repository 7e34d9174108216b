//! Unified error type for the Ember core
//!
//! One error enum covers the whole taxonomy the screens deal with:
//! validation errors raised before any mutation, permission refusals that
//! never reach the remote collaborator, and remote-call failures carrying a
//! best-effort message extracted from the response body.

use thiserror::Error;

/// Application error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Input rejected before any state change or remote call
    #[error("{0}")]
    Validation(String),

    /// Role-gated operation refused locally
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Resource not found
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Resource already exists
    #[error("{0}")]
    Conflict(String),

    /// Remote call failed; message comes from the response body when the
    /// server provided one
    #[error("{0}")]
    Remote(String),

    /// Authentication required
    #[error("Please sign in first")]
    Unauthorized,

    /// A mutation for this row is already in flight
    #[error("Another change to this entry is still saving")]
    Busy,

    /// Local state error (session file unreadable, bad fixture, ...)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a PermissionDenied error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::PermissionDenied(message.into())
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create a Remote error
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// True when the error was raised locally, before any remote effect
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Remote(_) | Self::Unauthorized)
    }
}

/// Result type for core operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AppError::validation("Price must be greater than $0.00");
        assert_eq!(err.to_string(), "Price must be greater than $0.00");

        let err = AppError::forbidden("Admin accounts cannot be disabled");
        assert_eq!(
            err.to_string(),
            "Permission denied: Admin accounts cannot be disabled"
        );

        let err = AppError::not_found("User");
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn test_is_local() {
        assert!(AppError::validation("x").is_local());
        assert!(AppError::forbidden("x").is_local());
        assert!(AppError::Busy.is_local());
        assert!(!AppError::remote("Request failed (500)").is_local());
    }
}
