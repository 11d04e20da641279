use serde::{Deserialize, Serialize};

use billfold_core::InvoiceId;
use billfold_invoicing::Invoice;

/// Every state transition, as a closed tagged variant type.
///
/// The reducer matches exhaustively over these, so an "unknown action" can
/// never reach it. Serialized form is `{"type": "ADD_INVOICE", "payload": …}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Append an invoice. The caller pre-populates all derived fields via
    /// the calculator before dispatching.
    AddInvoice(Invoice),
    /// Replace the invoice with the matching id (full-object replace, not a
    /// field-level patch). No-op when the id is unknown.
    UpdateInvoice(Invoice),
    /// Remove the invoice with the matching id. No-op when unknown.
    DeleteInvoice(InvoiceId),
    /// Replace the entire collection (bulk rehydration).
    LoadInvoices(Vec<Invoice>),
    SetLoading(bool),
    SetError(Option<String>),
}

impl Action {
    /// Stable tag for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddInvoice(_) => "ADD_INVOICE",
            Action::UpdateInvoice(_) => "UPDATE_INVOICE",
            Action::DeleteInvoice(_) => "DELETE_INVOICE",
            Action::LoadInvoices(_) => "LOAD_INVOICES",
            Action::SetLoading(_) => "SET_LOADING",
            Action::SetError(_) => "SET_ERROR",
        }
    }
}
