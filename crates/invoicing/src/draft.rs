use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use billfold_core::{DomainError, DomainResult, InvoiceId, ItemId};

use crate::invoice::Invoice;
use crate::item::InvoiceItem;
use crate::totals::{Totals, compute_totals};

/// Pre-submission form state for a new invoice.
///
/// The item list is private so it can never become empty: a draft starts with
/// one blank row and removal of the last remaining row is ignored. Everything
/// else is plain form data with no invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub client_name: String,
    pub client_email: String,
    pub client_address: String,
    items: Vec<InvoiceItem>,
    pub tax_rate: f64,
    pub notes: String,
}

impl InvoiceDraft {
    /// Start a draft with one blank item row.
    pub fn new(invoice_number: impl Into<String>, date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            date,
            due_date,
            client_name: String::new(),
            client_email: String::new(),
            client_address: String::new(),
            items: vec![InvoiceItem::blank(ItemId::new())],
            tax_rate: 0.0,
            notes: String::new(),
        }
    }

    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }

    /// Append a blank item row with a fresh id.
    pub fn add_item(&mut self) {
        self.items.push(InvoiceItem::blank(ItemId::new()));
    }

    /// Mutable access to one item row. The row's own mutators keep its
    /// derived amount in sync.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut InvoiceItem> {
        self.items.get_mut(index)
    }

    /// Remove an item row. Silent no-op when the index is out of range or
    /// only one row remains: an invoice always has at least one item.
    pub fn remove_item(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Current derived figures for display.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.items, self.tax_rate)
    }

    /// Atomically build the invoice: validate the rows, derive the totals,
    /// stamp status `draft` and both timestamps. The caller supplies the id
    /// and the clock reading; the domain never reads the clock itself.
    pub fn finalize(self, id: InvoiceId, now: DateTime<Utc>) -> DomainResult<Invoice> {
        if self.items.is_empty() {
            return Err(DomainError::validation(
                "cannot create invoice without items",
            ));
        }
        if self.tax_rate < 0.0 {
            return Err(DomainError::validation("tax rate must be non-negative"));
        }
        for item in &self.items {
            if item.quantity() == 0 {
                return Err(DomainError::validation(
                    "item quantity must be at least 1",
                ));
            }
            if item.unit_price() < 0.0 {
                return Err(DomainError::validation(
                    "item unit price must be non-negative",
                ));
            }
        }

        let totals = compute_totals(&self.items, self.tax_rate);
        Ok(Invoice::from_parts(
            id,
            self.invoice_number,
            self.date,
            self.due_date,
            self.client_name,
            self.client_email,
            self.client_address,
            self.items,
            self.tax_rate,
            totals,
            self.notes,
            now,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::InvoiceStatus;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn draft_with_items(lines: &[(u32, f64)]) -> InvoiceDraft {
        let mut draft = InvoiceDraft::new("INV-001", test_date(), test_date());
        for (i, &(quantity, unit_price)) in lines.iter().enumerate() {
            if i > 0 {
                draft.add_item();
            }
            let item = draft.item_mut(i).unwrap();
            item.set_quantity(quantity);
            item.set_unit_price(unit_price);
        }
        draft
    }

    #[test]
    fn new_draft_starts_with_one_blank_item() {
        let draft = InvoiceDraft::new("INV-001", test_date(), test_date());
        assert_eq!(draft.items().len(), 1);
        assert_eq!(draft.items()[0].quantity(), 1);
        assert_eq!(draft.items()[0].amount(), 0.0);
    }

    #[test]
    fn removing_the_last_item_is_ignored() {
        let mut draft = InvoiceDraft::new("INV-001", test_date(), test_date());
        draft.remove_item(0);
        assert_eq!(draft.items().len(), 1);

        draft.add_item();
        draft.remove_item(0);
        assert_eq!(draft.items().len(), 1);
    }

    #[test]
    fn removing_out_of_range_index_is_ignored() {
        let mut draft = draft_with_items(&[(1, 10.0), (2, 20.0)]);
        draft.remove_item(7);
        assert_eq!(draft.items().len(), 2);
    }

    #[test]
    fn draft_totals_track_item_edits() {
        let mut draft = draft_with_items(&[(2, 50.0), (1, 25.50)]);
        draft.tax_rate = 10.0;

        let totals = draft.totals();
        assert_eq!(totals.subtotal, 125.50);
        assert_eq!(totals.tax_amount, 12.55);
        assert!((totals.total - 138.05).abs() < 1e-9);
    }

    #[test]
    fn finalize_stamps_draft_status_and_timestamps() {
        let mut draft = draft_with_items(&[(2, 50.0)]);
        draft.client_name = "Acme Corp".to_string();
        draft.tax_rate = 10.0;

        let id = InvoiceId::new();
        let now = test_time();
        let invoice = draft.finalize(id, now).unwrap();

        assert_eq!(invoice.id_typed(), id);
        assert_eq!(invoice.status(), InvoiceStatus::Draft);
        assert_eq!(invoice.created_at(), now);
        assert_eq!(invoice.updated_at(), now);
        assert_eq!(invoice.client_name(), "Acme Corp");
        assert_eq!(invoice.subtotal(), 100.0);
        assert_eq!(invoice.tax_amount(), 10.0);
        assert_eq!(invoice.total(), 110.0);
    }

    #[test]
    fn finalize_rejects_zero_quantity() {
        let draft = draft_with_items(&[(0, 10.0)]);
        let err = draft.finalize(InvoiceId::new(), test_time()).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("quantity")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn finalize_rejects_negative_unit_price() {
        let mut draft = InvoiceDraft::new("INV-001", test_date(), test_date());
        draft.item_mut(0).unwrap().set_unit_price(-1.0);
        let err = draft.finalize(InvoiceId::new(), test_time()).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("unit price")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn finalize_rejects_negative_tax_rate() {
        let mut draft = draft_with_items(&[(1, 10.0)]);
        draft.tax_rate = -5.0;
        let err = draft.finalize(InvoiceId::new(), test_time()).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("tax rate")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn invoice_serializes_with_camel_case_fields() {
        let mut draft = draft_with_items(&[(2, 50.0)]);
        draft.tax_rate = 10.0;
        let invoice = draft.finalize(InvoiceId::new(), test_time()).unwrap();

        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["status"], "draft");
        assert!(json["invoiceNumber"].is_string());
        assert_eq!(json["taxAmount"], 10.0);
        assert_eq!(json["items"][0]["unitPrice"], 50.0);
    }
}
