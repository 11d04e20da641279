//! The single pure transition function: `(state, action) -> state`.

use crate::action::Action;
use crate::state::AppState;

/// Apply one action to the current state and return the next state.
///
/// No side effects beyond the returned value. Unknown-id updates and deletes
/// leave the collection untouched; that policy is deliberate (the error
/// channel is reserved for `SetError`).
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::AddInvoice(invoice) => {
            state.invoices.push(invoice);
        }
        Action::UpdateInvoice(invoice) => {
            let id = invoice.id_typed();
            if let Some(slot) = state.invoices.iter_mut().find(|inv| inv.id_typed() == id) {
                *slot = invoice;
            }
        }
        Action::DeleteInvoice(id) => {
            state.invoices.retain(|inv| inv.id_typed() != id);
        }
        Action::LoadInvoices(invoices) => {
            state.invoices = invoices;
        }
        Action::SetLoading(loading) => {
            state.loading = loading;
        }
        Action::SetError(error) => {
            state.error = error;
        }
    }
    state
}
