use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use billfold_core::{Entity, InvoiceId};

use crate::item::InvoiceItem;
use crate::totals::Totals;

/// Invoice status lifecycle.
///
/// Set to `Draft` at creation; afterwards changed only through a full-object
/// replace. No transition table is enforced between the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

/// A billing document: client info, line items, derived totals, status.
///
/// Constructed atomically by [`crate::draft::InvoiceDraft::finalize`]; the
/// derived fields (`subtotal`, `tax_amount`, `total`) are computed there and
/// never edited field-by-field afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    id: InvoiceId,
    invoice_number: String,
    date: NaiveDate,
    due_date: NaiveDate,
    client_name: String,
    client_email: String,
    client_address: String,
    items: Vec<InvoiceItem>,
    subtotal: f64,
    tax_rate: f64,
    tax_amount: f64,
    total: f64,
    notes: String,
    status: InvoiceStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Invoice {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        id: InvoiceId,
        invoice_number: String,
        date: NaiveDate,
        due_date: NaiveDate,
        client_name: String,
        client_email: String,
        client_address: String,
        items: Vec<InvoiceItem>,
        tax_rate: f64,
        totals: Totals,
        notes: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            invoice_number,
            date,
            due_date,
            client_name,
            client_email,
            client_address,
            items,
            subtotal: totals.subtotal,
            tax_rate,
            tax_amount: totals.tax_amount,
            total: totals.total,
            notes,
            status: InvoiceStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    pub fn client_address(&self) -> &str {
        &self.client_address
    }

    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }

    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn tax_amount(&self) -> f64 {
        self.tax_amount
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Build the replacement invoice for a status change; everything else is
    /// carried over. The id stays immutable by construction.
    pub fn with_status(mut self, status: InvoiceStatus, updated_at: DateTime<Utc>) -> Self {
        self.status = status;
        self.updated_at = updated_at;
        self
    }

    /// Build the replacement invoice for a notes edit.
    pub fn with_notes(mut self, notes: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        self.notes = notes.into();
        self.updated_at = updated_at;
        self
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
