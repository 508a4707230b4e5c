//! Receipt: a validated purchase record.
//!
//! A [`Receipt`] can only be obtained through [`validate_receipt`], so every
//! value that reaches a store or the points engine already satisfies the
//! field patterns. Once built it is immutable.
//!
//! [`validate_receipt`]: crate::validation::validate_receipt

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize, Serializer};

use crate::amount::Amount;
use crate::error::ValidationError;
use crate::validation::validate_receipt;

/// Textual form of `purchaseDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Textual form of `purchaseTime`.
pub const TIME_FORMAT: &str = "%H:%M";

/// A single line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "shortDescription")]
    pub(crate) description: String,
    pub(crate) price: Amount,
}

impl Item {
    /// The description exactly as submitted (untrimmed).
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Amount {
        self.price
    }
}

/// A validated receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub(crate) retailer: String,
    #[serde(serialize_with = "serialize_date")]
    pub(crate) purchase_date: NaiveDate,
    #[serde(serialize_with = "serialize_time")]
    pub(crate) purchase_time: NaiveTime,
    pub(crate) items: Vec<Item>,
    pub(crate) total: Amount,
}

impl Receipt {
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    /// Items in submission order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total(&self) -> Amount {
        self.total
    }
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_FORMAT))
}

fn serialize_time<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(TIME_FORMAT))
}

/// The unvalidated receipt shape accepted at the boundary.
///
/// Every field is optional so that a missing field surfaces as a
/// [`ValidationError::MissingField`] naming it, rather than as an opaque
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptInput {
    pub retailer: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_time: Option<String>,
    pub items: Option<Vec<ItemInput>>,
    pub total: Option<String>,
}

/// The unvalidated item shape accepted at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[serde(alias = "description")]
    pub short_description: Option<String>,
    pub price: Option<String>,
}

impl From<&Receipt> for ReceiptInput {
    fn from(receipt: &Receipt) -> Self {
        Self {
            retailer: Some(receipt.retailer.clone()),
            purchase_date: Some(receipt.purchase_date.format(DATE_FORMAT).to_string()),
            purchase_time: Some(receipt.purchase_time.format(TIME_FORMAT).to_string()),
            items: Some(receipt.items.iter().map(ItemInput::from).collect()),
            total: Some(receipt.total.to_string()),
        }
    }
}

impl From<&Item> for ItemInput {
    fn from(item: &Item) -> Self {
        Self {
            short_description: Some(item.description.clone()),
            price: Some(item.price.to_string()),
        }
    }
}

/// Builder for receipts, working on the textual wire form.
///
/// `build` runs the same validation as the boundary, so a builder can never
/// produce a receipt the service would have rejected.
#[derive(Debug, Clone)]
pub struct ReceiptBuilder {
    input: ReceiptInput,
}

impl ReceiptBuilder {
    /// Start a receipt for `retailer` with no items.
    pub fn new(retailer: impl Into<String>) -> Self {
        Self {
            input: ReceiptInput {
                retailer: Some(retailer.into()),
                purchase_date: None,
                purchase_time: None,
                items: Some(Vec::new()),
                total: None,
            },
        }
    }

    /// Set the purchase date (`YYYY-MM-DD`).
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.input.purchase_date = Some(date.into());
        self
    }

    /// Set the purchase time (`HH:MM`).
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.input.purchase_time = Some(time.into());
        self
    }

    /// Append an item.
    pub fn item(mut self, description: impl Into<String>, price: impl Into<String>) -> Self {
        self.input
            .items
            .get_or_insert_with(Vec::new)
            .push(ItemInput {
                short_description: Some(description.into()),
                price: Some(price.into()),
            });
        self
    }

    /// Set the total.
    pub fn total(mut self, total: impl Into<String>) -> Self {
        self.input.total = Some(total.into());
        self
    }

    /// The accumulated, still unvalidated input.
    pub fn into_input(self) -> ReceiptInput {
        self.input
    }

    /// Validate and build.
    pub fn build(self) -> Result<Receipt, ValidationError> {
        validate_receipt(self.input)
    }
}
