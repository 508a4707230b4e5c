//! Store trait: the abstract interface for the receipt table.
//!
//! This trait allows the service to be storage-agnostic.

use async_trait::async_trait;
use receipt_points_core::{Receipt, ReceiptId};

use crate::error::Result;

/// The ReceiptStore trait: async interface for the identifier-keyed table.
///
/// # Design Notes
///
/// - **Atomic inserts**: an insert is visible in full or not at all.
/// - **Owned reads**: `get` returns a copy, so callers never hold a lock
///   while working with a receipt.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Store a receipt under a freshly generated ID and return the ID.
    async fn insert(&self, receipt: Receipt) -> Result<ReceiptId>;

    /// Get the receipt stored under exactly `id`.
    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>>;

    /// Number of stored receipts.
    async fn len(&self) -> Result<usize>;

    /// True when nothing has been stored.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

#[async_trait]
impl<S: ReceiptStore + ?Sized> ReceiptStore for std::sync::Arc<S> {
    async fn insert(&self, receipt: Receipt) -> Result<ReceiptId> {
        (**self).insert(receipt).await
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>> {
        (**self).get(id).await
    }

    async fn len(&self) -> Result<usize> {
        (**self).len().await
    }
}
