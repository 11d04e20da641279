//! Read-only aggregation over a state snapshot.
//!
//! Everything here is a pure function over `&[Invoice]`; the dashboard and
//! list views call these and render the results. All of it tolerates an
//! empty collection.

pub mod dashboard;
pub mod filter;

pub use dashboard::{DashboardStats, recent_invoices, total_revenue};
pub use filter::{StatusFilter, filter_invoices};
