//! Exact money amounts.
//!
//! Totals and prices are carried as scaled decimals, never binary floats,
//! so `% 0.25` and `ceil(price * 0.2)` are exact for values like `0.10`.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("valid amount regex"));

/// Number of fractional digits every amount carries.
pub const AMOUNT_SCALE: u32 = 2;

/// A non-negative money amount with exactly two fractional digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// `0.00`
    pub const ZERO: Self = Self(Decimal::from_parts(0, 0, 0, false, AMOUNT_SCALE));

    /// `0.25`
    pub const QUARTER: Self = Self(Decimal::from_parts(25, 0, 0, false, AMOUNT_SCALE));

    /// Build an amount from a count of cents.
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), AMOUNT_SCALE))
    }

    /// Parse the textual `^\d+\.\d{2}$` form.
    ///
    /// `field` names the source in any error.
    pub fn parse(field: &str, text: &str) -> Result<Self, ValidationError> {
        if !AMOUNT_RE.is_match(text) {
            return Err(ValidationError::invalid(
                field,
                "must be a non-negative amount with two decimal places",
            ));
        }
        let value = Decimal::from_str_exact(text)
            .map_err(|_| ValidationError::AmountOutOfRange(field.to_string()))?;
        Ok(Self(value))
    }

    /// The underlying decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// True when the cents part is `.00`.
    pub fn is_round_dollar(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// True when this amount is an exact multiple of `step`.
    ///
    /// A zero step is never divided by; only zero is a multiple of zero.
    pub fn is_multiple_of(&self, step: Amount) -> bool {
        if step.0.is_zero() {
            return self.0.is_zero();
        }
        (self.0 % step.0).is_zero()
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("amount", s)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
