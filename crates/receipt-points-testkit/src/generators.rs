//! Proptest generators for property-based testing.
//!
//! Every strategy here produces input that passes validation.

use proptest::prelude::*;

use receipt_points_core::{
    validate_receipt, Amount, ItemInput, Receipt, ReceiptBuilder, ReceiptInput,
};

/// Generate a retailer name.
pub fn retailer() -> impl Strategy<Value = String> {
    "[A-Za-z0-9&][A-Za-z0-9 &_-]{0,23}".prop_map(String::from)
}

/// Generate an item description, possibly with surrounding whitespace.
pub fn description() -> impl Strategy<Value = String> {
    "[ ]{0,2}[A-Za-z0-9][A-Za-z0-9 _-]{0,23}[ ]{0,2}".prop_map(String::from)
}

/// Generate an amount in its `D.CC` text form.
pub fn amount_text() -> impl Strategy<Value = String> {
    (0u32..100_000u32).prop_map(|cents| Amount::from_cents(cents).to_string())
}

/// Generate a calendar date in `YYYY-MM-DD` form.
///
/// Days stop at 28 so every month is valid.
pub fn date_text() -> impl Strategy<Value = String> {
    (1990u32..=2035u32, 1u32..=12u32, 1u32..=28u32)
        .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

/// Generate a 24-hour clock time in `HH:MM` form.
pub fn time_text() -> impl Strategy<Value = String> {
    (0u32..24u32, 0u32..60u32).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

/// Generate an item.
pub fn item_input() -> impl Strategy<Value = ItemInput> {
    (description(), amount_text()).prop_map(|(desc, price)| ItemInput {
        short_description: Some(desc),
        price: Some(price),
    })
}

/// Parameters for generating a receipt.
#[derive(Debug, Clone)]
pub struct ReceiptParams {
    pub retailer: String,
    pub date: String,
    pub time: String,
    pub items: Vec<(String, String)>,
    pub total: String,
}

impl ReceiptParams {
    pub fn builder(&self) -> ReceiptBuilder {
        self.items.iter().fold(
            ReceiptBuilder::new(self.retailer.clone())
                .date(self.date.clone())
                .time(self.time.clone())
                .total(self.total.clone()),
            |builder, (desc, price)| builder.item(desc.clone(), price.clone()),
        )
    }
}

impl Arbitrary for ReceiptParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            retailer(),
            date_text(),
            time_text(),
            prop::collection::vec((description(), amount_text()), 0..12),
            amount_text(),
        )
            .prop_map(|(retailer, date, time, items, total)| ReceiptParams {
                retailer,
                date,
                time,
                items,
                total,
            })
            .boxed()
    }
}

/// Generate valid boundary input.
pub fn receipt_input() -> impl Strategy<Value = ReceiptInput> {
    any::<ReceiptParams>().prop_map(|params| params.builder().into_input())
}

/// Generate a validated receipt.
pub fn receipt() -> impl Strategy<Value = Receipt> {
    receipt_input().prop_filter_map("generated input must validate", |input| {
        validate_receipt(input).ok()
    })
}
