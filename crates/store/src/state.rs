use serde::{Deserialize, Serialize};

use billfold_invoicing::Invoice;

/// The whole application state.
///
/// `invoices` keeps insertion order. The fields are readable by anyone
/// holding a snapshot; mutation happens only inside the reducer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub invoices: Vec<Invoice>,
    pub loading: bool,
    pub error: Option<String>,
}
