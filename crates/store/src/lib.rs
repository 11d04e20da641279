//! Application state store.
//!
//! One authoritative, mutation-serialized view of the invoice collection:
//! every write funnels through [`Store::dispatch`], which applies the pure
//! [`reduce`] transition. Readers borrow the state snapshot and never mutate
//! it directly.

pub mod action;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::Action;
pub use reducer::reduce;
pub use state::AppState;
pub use store::Store;
