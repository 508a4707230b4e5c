//! Error types for the service.

use receipt_points_core::ValidationError;
use receipt_points_store::StoreError;
use thiserror::Error;

/// Message returned for any lookup that does not resolve to a receipt.
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// Errors that can occur during service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submitted receipt failed boundary validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// No receipt is stored under the requested ID.
    #[error("No receipt found for that ID.")]
    NotFound(String),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
