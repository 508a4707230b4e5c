//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use receipt_points_core::{Receipt, ReceiptBuilder, ReceiptId, ReceiptInput};
use receipt_points_store::{MemoryStore, ReceiptStore};

/// `Target`, one Pepsi, total `1.25`, even day, before the afternoon
/// window: 31 points.
pub fn single_item_receipt() -> ReceiptBuilder {
    ReceiptBuilder::new("Target")
        .date("2022-01-02")
        .time("13:13")
        .item("Pepsi - 12-oz", "1.25")
        .total("1.25")
}

/// Five items on an odd day, total `35.35`: 28 points.
pub fn morning_receipt() -> ReceiptBuilder {
    ReceiptBuilder::new("Target")
        .date("2022-01-01")
        .time("13:01")
        .item("Mountain Dew 12PK", "6.49")
        .item("Emils Cheese Pizza", "12.25")
        .item("Knorr Creamy Chicken", "1.26")
        .item("Doritos Nacho Cheese", "3.35")
        .item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")
        .total("35.35")
}

/// Four Gatorades at 14:33, round total `9.00`: 109 points.
pub fn corner_market_receipt() -> ReceiptBuilder {
    ReceiptBuilder::new("M&M Corner Market")
        .date("2022-03-20")
        .time("14:33")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .total("9.00")
}

/// A test fixture with a memory store.
pub struct TestFixture {
    pub store: MemoryStore,
}

impl TestFixture {
    /// Create a new test fixture with an empty store.
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }

    /// Validate `builder` and store the receipt.
    ///
    /// Panics if the builder does not describe a valid receipt.
    pub async fn store_receipt(&self, builder: ReceiptBuilder) -> (ReceiptId, Receipt) {
        let receipt = builder.build().expect("fixture receipt must be valid");
        let id = self
            .store
            .insert(receipt.clone())
            .await
            .expect("memory store insert");
        (id, receipt)
    }

    /// Boundary input for `builder`, for driving the HTTP layer.
    pub fn input(builder: ReceiptBuilder) -> ReceiptInput {
        builder.into_input()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points_core::calculate_points;

    #[test]
    fn test_fixtures_are_valid() {
        for builder in [single_item_receipt(), morning_receipt(), corner_market_receipt()] {
            assert!(builder.build().is_ok());
        }
    }

    #[test]
    fn test_fixture_points() {
        assert_eq!(calculate_points(&single_item_receipt().build().unwrap()), 31);
        assert_eq!(calculate_points(&morning_receipt().build().unwrap()), 28);
        assert_eq!(calculate_points(&corner_market_receipt().build().unwrap()), 109);
    }

    #[tokio::test]
    async fn test_fixture_store_roundtrip() {
        let fixture = TestFixture::new();
        let (id, receipt) = fixture.store_receipt(corner_market_receipt()).await;

        let stored = fixture.store.get(&id).await.unwrap();
        assert_eq!(stored, Some(receipt));
    }

    #[test]
    fn test_fixture_input_serializes_wire_names() {
        let input = TestFixture::input(single_item_receipt());
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["purchaseDate"], "2022-01-02");
        assert_eq!(json["items"][0]["shortDescription"], "Pepsi - 12-oz");
    }
}
