//! # Receipt Points Testkit
//!
//! Testing utilities for receipt points.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known receipts with their expected points
//! - **Generators**: Proptest strategies for valid receipts
//! - **Fixtures**: Ready-made receipts and a store-backed fixture
//!
//! ## Golden Vectors
//!
//! ```rust
//! use receipt_points_core::calculate_points;
//! use receipt_points_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     let receipt = vector.receipt();
//!     assert_eq!(calculate_points(&receipt), vector.expected_points, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use receipt_points_core::calculate_points;
//! use receipt_points_testkit::generators::receipt;
//!
//! proptest! {
//!     #[test]
//!     fn points_are_deterministic(r in receipt()) {
//!         prop_assert_eq!(calculate_points(&r), calculate_points(&r));
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{corner_market_receipt, morning_receipt, single_item_receipt, TestFixture};
pub use generators::{receipt, receipt_input, ReceiptParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
