//! Pure invoice arithmetic.
//!
//! No rounding is applied here; two-decimal display formatting is a
//! presentation concern and stays outside this crate.

use serde::{Deserialize, Serialize};

use billfold_core::ValueObject;

use crate::item::InvoiceItem;

/// Derived amount of a single line item: `quantity * unit_price`.
pub fn compute_item_amount(quantity: u32, unit_price: f64) -> f64 {
    f64::from(quantity) * unit_price
}

/// Invoice-level derived figures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
}

impl ValueObject for Totals {}

/// Derive subtotal, tax amount and total from line items and a tax rate
/// (percentage).
///
/// An empty item slice yields all-zero totals. Negative inputs are not
/// validated here; callers constrain quantities and prices to non-negative
/// values before building items.
pub fn compute_totals(items: &[InvoiceItem], tax_rate: f64) -> Totals {
    let subtotal: f64 = items.iter().map(InvoiceItem::amount).sum();
    let tax_amount = subtotal * tax_rate / 100.0;
    Totals {
        subtotal,
        tax_amount,
        total: subtotal + tax_amount,
    }
}
