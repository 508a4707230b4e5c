//! The points engine: seven independent scoring rules over a receipt.
//!
//! Rules are evaluated separately and summed, so the order does not matter.
//! Money arithmetic is exact decimal; every sum saturates.

use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::amount::Amount;
use crate::receipt::{Item, Receipt};

/// Points for a round-dollar total.
pub const ROUND_DOLLAR_POINTS: u64 = 50;
/// Points for a total that is a multiple of `0.25`.
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
/// Points per complete pair of items.
pub const ITEM_PAIR_POINTS: u64 = 5;
/// Points for an odd purchase day.
pub const ODD_DAY_POINTS: u64 = 6;
/// Points for a purchase inside the afternoon window.
pub const AFTERNOON_POINTS: u64 = 10;

/// Multiplier applied to qualifying item prices (`0.2`).
const DESCRIPTION_PRICE_FACTOR: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsConfig {
    /// Whether an item whose description trims to the empty string earns the
    /// description bonus. Zero is a multiple of three, so the literal rule
    /// says yes; the default says no.
    pub blank_descriptions_qualify: bool,
}

/// Per-rule points for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rules.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add)
    }
}

/// Scores receipts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointsEngine {
    config: PointsConfig,
}

impl PointsEngine {
    pub fn new(config: PointsConfig) -> Self {
        Self { config }
    }

    /// Score a receipt rule by rule.
    pub fn score(&self, receipt: &Receipt) -> PointsBreakdown {
        PointsBreakdown {
            retailer: retailer_points(receipt.retailer()),
            round_dollar: round_dollar_points(receipt.total()),
            quarter_multiple: quarter_multiple_points(receipt.total()),
            item_pairs: item_pair_points(receipt.items().len()),
            descriptions: receipt
                .items()
                .iter()
                .map(|item| self.description_points(item))
                .fold(0u64, u64::saturating_add),
            odd_day: odd_day_points(receipt),
            afternoon: afternoon_points(receipt),
        }
    }

    /// Total points for a receipt.
    pub fn calculate(&self, receipt: &Receipt) -> u64 {
        self.score(receipt).total()
    }

    /// `ceil(price * 0.2)` when the trimmed description length is a multiple
    /// of three.
    fn description_points(&self, item: &Item) -> u64 {
        let length = item.description().trim().chars().count();
        if length % 3 != 0 {
            return 0;
        }
        if length == 0 && !self.config.blank_descriptions_qualify {
            return 0;
        }
        let bonus = (item.price().as_decimal() * DESCRIPTION_PRICE_FACTOR).ceil();
        bonus.to_u64().unwrap_or(u64::MAX)
    }
}

/// Total points for a receipt with the default configuration.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsEngine::default().calculate(receipt)
}

/// One point per ASCII letter or digit in the retailer name.
fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn round_dollar_points(total: Amount) -> u64 {
    if total.is_round_dollar() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: Amount) -> u64 {
    if total.is_multiple_of(Amount::QUARTER) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// Five points per complete pair; an odd item out earns nothing.
fn item_pair_points(count: usize) -> u64 {
    (count / 2) as u64 * ITEM_PAIR_POINTS
}

fn odd_day_points(receipt: &Receipt) -> u64 {
    if receipt.purchase_date().day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 14:01 through 15:59 inclusive. 14:00 itself does not qualify.
fn afternoon_points(receipt: &Receipt) -> u64 {
    let time = receipt.purchase_time();
    let (hour, minute) = (time.hour(), time.minute());
    if (hour == 14 && minute >= 1) || hour == 15 {
        AFTERNOON_POINTS
    } else {
        0
    }
}
