//! # Receipt Points Core
//!
//! Pure primitives for receipt points: the receipt data model, exact money
//! amounts, boundary validation, and the points engine.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over validated receipt values.
//!
//! ## Key Types
//!
//! - [`Receipt`] - A validated purchase record
//! - [`ReceiptInput`] - The unvalidated shape accepted at the boundary
//! - [`Amount`] - Exact two-fraction-digit money value
//! - [`ReceiptId`] - Opaque identifier assigned by a store
//! - [`PointsEngine`] - The seven scoring rules
//!
//! ## Scoring
//!
//! ```rust
//! use receipt_points_core::{calculate_points, validate_receipt, ItemInput, ReceiptInput};
//!
//! let input = ReceiptInput {
//!     retailer: Some("Target".into()),
//!     purchase_date: Some("2022-01-02".into()),
//!     purchase_time: Some("13:13".into()),
//!     items: Some(vec![ItemInput {
//!         short_description: Some("Pepsi - 12-oz".into()),
//!         price: Some("1.25".into()),
//!     }]),
//!     total: Some("1.25".into()),
//! };
//!
//! let receipt = validate_receipt(input).unwrap();
//! assert_eq!(calculate_points(&receipt), 31);
//! ```

pub mod amount;
pub mod error;
pub mod points;
pub mod receipt;
pub mod types;
pub mod validation;

pub use amount::Amount;
pub use error::{IdError, ValidationError};
pub use points::{calculate_points, PointsBreakdown, PointsConfig, PointsEngine};
pub use receipt::{Item, ItemInput, Receipt, ReceiptBuilder, ReceiptInput};
pub use types::ReceiptId;
pub use validation::validate_receipt;
