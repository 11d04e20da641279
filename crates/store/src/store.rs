use tracing::debug;

use billfold_core::InvoiceId;
use billfold_invoicing::Invoice;

use crate::action::Action;
use crate::reducer::reduce;
use crate::state::AppState;

/// The single owner of [`AppState`].
///
/// Constructed once at application start and threaded explicitly to whoever
/// needs it; there is no ambient/static instance. All mutation goes through
/// [`Store::dispatch`]; everything else borrows the state read-only.
///
/// Single-threaded by design: each dispatch runs to completion before the
/// next, so actions apply in dispatch order and no locking is needed.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously captured state (bulk rehydration without a
    /// `LoadInvoices` dispatch).
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply one action through the reducer.
    pub fn dispatch(&mut self, action: Action) {
        debug!(
            action = action.kind(),
            invoices = self.state.invoices.len(),
            "dispatching"
        );
        let current = core::mem::take(&mut self.state);
        self.state = reduce(current, action);
    }

    pub fn add_invoice(&mut self, invoice: Invoice) {
        self.dispatch(Action::AddInvoice(invoice));
    }

    pub fn update_invoice(&mut self, invoice: Invoice) {
        self.dispatch(Action::UpdateInvoice(invoice));
    }

    pub fn delete_invoice(&mut self, id: InvoiceId) {
        self.dispatch(Action::DeleteInvoice(id));
    }
}
