//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Every freshly generated ID collided with an existing entry.
    #[error("could not allocate an unused receipt id after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
