//! # Receipt Points Store
//!
//! Storage abstraction for receipt points. Provides a trait-based interface
//! for the identifier-to-receipt table with an in-memory implementation.
//!
//! ## Overview
//!
//! The store module abstracts receipt storage behind the [`ReceiptStore`]
//! trait, allowing the service to be storage-agnostic. The shipped
//! implementation is [`MemoryStore`], which lives for the process lifetime.
//!
//! ## Key Types
//!
//! - [`ReceiptStore`] - The async trait for all storage operations
//! - [`MemoryStore`] - Lock-guarded in-memory table
//!
//! ## Usage
//!
//! ```rust
//! use receipt_points_core::ReceiptBuilder;
//! use receipt_points_store::{MemoryStore, ReceiptStore};
//!
//! # async fn example() -> receipt_points_store::Result<()> {
//! let store = MemoryStore::new();
//! let receipt = ReceiptBuilder::new("Target")
//!     .date("2022-01-02")
//!     .time("13:13")
//!     .total("0.00")
//!     .build()
//!     .unwrap();
//!
//! let id = store.insert(receipt.clone()).await?;
//! assert_eq!(store.get(&id).await?, Some(receipt));
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Notes
//!
//! - **Store-assigned IDs**: callers never supply an ID; insert returns one
//! - **No reuse**: a generated ID that is already present is regenerated
//! - **Immutable entries**: there is no update or delete
//! - **Exact lookup**: no prefix or partial matching

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::ReceiptStore;
