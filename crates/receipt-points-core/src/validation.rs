//! Boundary validation: turns a [`ReceiptInput`] into a [`Receipt`].
//!
//! Nothing downstream of this module re-checks field shapes; the store and
//! the points engine rely on the invariants established here.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::amount::Amount;
use crate::error::ValidationError;
use crate::receipt::{Item, ItemInput, Receipt, ReceiptInput, DATE_FORMAT, TIME_FORMAT};

// Whitespace is the ASCII set only; `\s` alone would admit U+00A0, U+3000, etc.
static RETAILER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_ \t\n\x0B\f\r&-]+$").expect("valid retailer regex")
});
static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_ \t\n\x0B\f\r-]+$").expect("valid description regex")
});
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid time regex"));

/// Validate a boundary receipt.
///
/// This performs, in field order:
/// - Presence of `retailer`, `purchaseDate`, `purchaseTime`, `items`, `total`
/// - Retailer pattern (word characters, whitespace, `-`, `&`)
/// - Date shape and calendar validity
/// - Time shape and 24-hour validity
/// - Per item: description presence and pattern, price presence and shape
/// - Total shape (`^\d+\.\d{2}$`, so never negative)
pub fn validate_receipt(input: ReceiptInput) -> Result<Receipt, ValidationError> {
    let ReceiptInput {
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    } = input;

    let retailer = require("retailer", retailer)?;
    let purchase_date = require("purchaseDate", purchase_date)?;
    let purchase_time = require("purchaseTime", purchase_time)?;
    let items = require("items", items)?;
    let total = require("total", total)?;

    if !RETAILER_RE.is_match(&retailer) {
        return Err(ValidationError::invalid(
            "retailer",
            "may only contain letters, digits, whitespace, '-' and '&'",
        ));
    }

    let purchase_date = parse_date(&purchase_date)?;
    let purchase_time = parse_time(&purchase_time)?;

    let items = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    let total = Amount::parse("total", &total)?;

    Ok(Receipt {
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

fn validate_item(index: usize, item: ItemInput) -> Result<Item, ValidationError> {
    let description_field = format!("items[{index}].shortDescription");
    let price_field = format!("items[{index}].price");

    let description = require(&description_field, item.short_description)?;
    let price = require(&price_field, item.price)?;

    if !DESCRIPTION_RE.is_match(&description) {
        return Err(ValidationError::invalid(
            description_field,
            "may only contain letters, digits, whitespace and '-'",
        ));
    }

    let price = Amount::parse(&price_field, &price)?;
    Ok(Item { description, price })
}

fn require<T>(field: &str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::MissingField(field.to_string()))
}

fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    if !DATE_RE.is_match(text) {
        return Err(ValidationError::invalid("purchaseDate", "must be YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| ValidationError::invalid("purchaseDate", "is not a calendar date"))
}

fn parse_time(text: &str) -> Result<NaiveTime, ValidationError> {
    if !TIME_RE.is_match(text) {
        return Err(ValidationError::invalid("purchaseTime", "must be HH:MM"));
    }
    NaiveTime::parse_from_str(text, TIME_FORMAT)
        .map_err(|_| ValidationError::invalid("purchaseTime", "is not a 24-hour time"))
}
