//! The service: unified API over validation, storage, and scoring.
//!
//! The service brings the store and the points engine together behind the
//! two operations the HTTP layer exposes.

use std::sync::Arc;

use receipt_points_core::{
    validate_receipt, PointsConfig, PointsEngine, Receipt, ReceiptId, ReceiptInput,
};
use receipt_points_store::ReceiptStore;

use crate::error::{Result, ServiceError};

/// Configuration for the service.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Points engine configuration.
    pub points: PointsConfig,
}

/// The main service struct.
///
/// Provides a unified API for:
/// - Validating and storing receipts
/// - Looking up stored receipts
/// - Scoring stored receipts
pub struct ReceiptService<S: ReceiptStore> {
    /// The storage backend.
    store: Arc<S>,
    /// The scoring rules.
    engine: PointsEngine,
}

impl<S: ReceiptStore> ReceiptService<S> {
    /// Create a new service instance.
    pub fn new(store: S, config: ServiceConfig) -> Self {
        Self::with_shared_store(Arc::new(store), config)
    }

    /// Create a service over a store that is also held elsewhere.
    pub fn with_shared_store(store: Arc<S>, config: ServiceConfig) -> Self {
        Self {
            store,
            engine: PointsEngine::new(config.points),
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Create
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate a submitted receipt and store it.
    ///
    /// Nothing is stored when validation fails.
    pub async fn process_receipt(&self, input: ReceiptInput) -> Result<ReceiptId> {
        let receipt = match validate_receipt(input) {
            Ok(receipt) => receipt,
            Err(error) => {
                tracing::info!(field = error.field(), %error, "receipt rejected");
                return Err(error.into());
            }
        };

        let item_count = receipt.items().len();
        let id = self.store.insert(receipt).await?;
        tracing::info!(%id, item_count, "receipt accepted");
        Ok(id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the stored receipt for `id`.
    ///
    /// Malformed IDs are reported the same way as unknown ones.
    pub async fn get_receipt(&self, id: &str) -> Result<Receipt> {
        let Ok(receipt_id) = ReceiptId::parse(id) else {
            tracing::debug!(id, "lookup with malformed receipt id");
            return Err(ServiceError::NotFound(id.to_string()));
        };

        match self.store.get(&receipt_id).await? {
            Some(receipt) => Ok(receipt),
            None => {
                tracing::debug!(id = %receipt_id, "lookup miss");
                Err(ServiceError::NotFound(id.to_string()))
            }
        }
    }

    /// Score the receipt stored under `id`.
    ///
    /// Scoring runs on the retrieved copy, outside any store lock.
    pub async fn get_points(&self, id: &str) -> Result<u64> {
        let receipt = self.get_receipt(id).await?;
        let breakdown = self.engine.score(&receipt);
        let points = breakdown.total();

        tracing::debug!(
            id,
            retailer = breakdown.retailer,
            round_dollar = breakdown.round_dollar,
            quarter_multiple = breakdown.quarter_multiple,
            item_pairs = breakdown.item_pairs,
            descriptions = breakdown.descriptions,
            odd_day = breakdown.odd_day,
            afternoon = breakdown.afternoon,
            "points breakdown"
        );
        tracing::info!(id, points, "points computed");

        Ok(points)
    }
}
