//! Invoicing domain module.
//!
//! This crate contains the invoice data model and the total calculator,
//! implemented purely as deterministic domain logic (no IO, no clock reads,
//! no storage).

pub mod draft;
pub mod invoice;
pub mod item;
pub mod totals;

pub use draft::InvoiceDraft;
pub use invoice::{Invoice, InvoiceStatus};
pub use item::InvoiceItem;
pub use totals::{Totals, compute_item_amount, compute_totals};
