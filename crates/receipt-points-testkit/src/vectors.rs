//! Golden points vectors.
//!
//! Every implementation of the scoring rules must produce the same points
//! for these receipts. Each vector carries the request body exactly as a
//! client would send it.

use receipt_points_core::{calculate_points, validate_receipt, Receipt, ReceiptInput};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single golden test vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenVector {
    pub name: String,
    pub description: String,
    /// JSON request body.
    pub body: Value,
    pub expected_points: u64,
}

impl GoldenVector {
    fn new(name: &str, description: &str, body: Value, expected_points: u64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            body,
            expected_points,
        }
    }

    /// The body as boundary input.
    pub fn input(&self) -> ReceiptInput {
        serde_json::from_value(self.body.clone()).expect("golden vector body is receipt-shaped")
    }

    /// The validated receipt.
    pub fn receipt(&self) -> Receipt {
        validate_receipt(self.input()).expect("golden vector body is valid")
    }
}

fn one_item(time: &str) -> Value {
    json!({
        "retailer": "Walgreens",
        "purchaseDate": "2022-01-02",
        "purchaseTime": time,
        "items": [{ "shortDescription": "Pepsi - 12-oz", "price": "1.01" }],
        "total": "1.01"
    })
}

/// All golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector::new(
            "single_item",
            "Target, one item, quarter-multiple total, even day, 13:13",
            json!({
                "retailer": "Target",
                "purchaseDate": "2022-01-02",
                "purchaseTime": "13:13",
                "items": [{ "shortDescription": "Pepsi - 12-oz", "price": "1.25" }],
                "total": "1.25"
            }),
            31,
        ),
        GoldenVector::new(
            "target_five_items",
            "odd day, two pairs, two descriptions with length divisible by 3",
            json!({
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": [
                    { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
                    { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
                    { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
                    { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
                    { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
                ],
                "total": "35.35"
            }),
            28,
        ),
        GoldenVector::new(
            "corner_market",
            "ampersand retailer, round total, two pairs, afternoon",
            json!({
                "retailer": "M&M Corner Market",
                "purchaseDate": "2022-03-20",
                "purchaseTime": "14:33",
                "items": [
                    { "shortDescription": "Gatorade", "price": "2.25" },
                    { "shortDescription": "Gatorade", "price": "2.25" },
                    { "shortDescription": "Gatorade", "price": "2.25" },
                    { "shortDescription": "Gatorade", "price": "2.25" }
                ],
                "total": "9.00"
            }),
            109,
        ),
        GoldenVector::new(
            "round_hundred",
            "round-dollar and quarter rules both fire",
            json!({
                "retailer": "Shop",
                "purchaseDate": "2022-01-02",
                "purchaseTime": "09:00",
                "items": [],
                "total": "100.00"
            }),
            4 + 50 + 25,
        ),
        GoldenVector::new(
            "ten_cents",
            "0.10 is neither round nor a quarter multiple",
            json!({
                "retailer": "Shop",
                "purchaseDate": "2022-01-02",
                "purchaseTime": "09:00",
                "items": [{ "shortDescription": "Gum", "price": "0.10" }],
                "total": "0.10"
            }),
            4 + 1,
        ),
        GoldenVector::new("window_1400", "14:00 is outside the window", one_item("14:00"), 9),
        GoldenVector::new("window_1401", "14:01 is inside the window", one_item("14:01"), 19),
        GoldenVector::new("window_1559", "15:59 is inside the window", one_item("15:59"), 19),
        GoldenVector::new("window_1600", "16:00 is outside the window", one_item("16:00"), 9),
        GoldenVector::new(
            "blank_description",
            "an all-whitespace description earns nothing by default",
            json!({
                "retailer": "Shop",
                "purchaseDate": "2022-01-02",
                "purchaseTime": "09:00",
                "items": [{ "shortDescription": "   ", "price": "10.01" }],
                "total": "10.01"
            }),
            4,
        ),
    ]
}

/// Check every vector against the default points engine.
pub fn verify_all_vectors() -> Result<(), String> {
    for vector in all_vectors() {
        let actual = calculate_points(&vector.receipt());
        if actual != vector.expected_points {
            return Err(format!(
                "vector {}: expected {} points, got {}",
                vector.name, vector.expected_points, actual
            ));
        }
    }
    Ok(())
}
