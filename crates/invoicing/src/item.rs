use serde::{Deserialize, Serialize};

use billfold_core::{Entity, ItemId};

use crate::totals::compute_item_amount;

/// One billable line within an invoice.
///
/// `amount` is derived and kept in sync by the mutators; fields are private
/// so the `amount == quantity * unit_price` invariant cannot be broken from
/// outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    id: ItemId,
    description: String,
    quantity: u32,
    unit_price: f64,
    amount: f64,
}

impl InvoiceItem {
    pub fn new(id: ItemId, description: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            unit_price,
            amount: compute_item_amount(quantity, unit_price),
        }
    }

    /// A fresh form row: empty description, quantity 1, zero price.
    pub fn blank(id: ItemId) -> Self {
        Self::new(id, "", 1, 0.0)
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Edit the quantity; the derived amount is recomputed.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.amount = compute_item_amount(self.quantity, self.unit_price);
    }

    /// Edit the unit price; the derived amount is recomputed.
    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
        self.amount = compute_item_amount(self.quantity, self.unit_price);
    }
}

impl Entity for InvoiceItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_tracks_quantity_and_price_edits() {
        let mut item = InvoiceItem::blank(ItemId::new());
        assert_eq!(item.amount(), 0.0);

        item.set_unit_price(19.99);
        assert_eq!(item.amount(), 19.99);

        item.set_quantity(3);
        assert_eq!(item.amount(), 3.0 * 19.99);

        item.set_description("widgets");
        assert_eq!(item.amount(), 3.0 * 19.99);
    }
}
