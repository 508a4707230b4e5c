//! In-memory implementation of the ReceiptStore trait.
//!
//! Keeps everything in a lock-guarded map with no persistence. All data is
//! lost when the store is dropped.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use receipt_points_core::{Receipt, ReceiptId};

use crate::error::{Result, StoreError};
use crate::traits::ReceiptStore;

/// How many fresh IDs an insert tries before giving up.
pub const MAX_ID_ATTEMPTS: usize = 8;

/// In-memory store implementation.
///
/// Thread-safe via RwLock: inserts take the write lock for the single map
/// operation, reads take the read lock only long enough to clone the entry.
pub struct MemoryStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
    id_source: fn() -> ReceiptId,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::with_id_source(ReceiptId::generate)
    }

    /// Create a store that draws IDs from `id_source` instead of random UUIDs.
    pub fn with_id_source(id_source: fn() -> ReceiptId) -> Self {
        Self {
            receipts: RwLock::new(HashMap::new()),
            id_source,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReceiptStore for MemoryStore {
    async fn insert(&self, receipt: Receipt) -> Result<ReceiptId> {
        let mut receipts = self.receipts.write();

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = (self.id_source)();
            match receipts.entry(id) {
                Entry::Vacant(slot) => {
                    slot.insert(receipt);
                    return Ok(id);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(%id, attempt, "generated receipt id already in use");
                }
            }
        }

        Err(StoreError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>> {
        let receipts = self.receipts.read();
        Ok(receipts.get(id).cloned())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.receipts.read().len())
    }
}
