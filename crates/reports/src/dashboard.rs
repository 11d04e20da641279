use serde::{Deserialize, Serialize};

use billfold_invoicing::{Invoice, InvoiceStatus};

/// Headline counts for the dashboard.
///
/// "Pending" counts invoices that have been sent but not yet paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub paid: usize,
    pub pending: usize,
    pub overdue: usize,
}

impl DashboardStats {
    pub fn from_invoices(invoices: &[Invoice]) -> Self {
        let mut stats = Self {
            total: invoices.len(),
            ..Self::default()
        };
        for invoice in invoices {
            match invoice.status() {
                InvoiceStatus::Paid => stats.paid += 1,
                InvoiceStatus::Sent => stats.pending += 1,
                InvoiceStatus::Overdue => stats.overdue += 1,
                InvoiceStatus::Draft => {}
            }
        }
        stats
    }
}

/// Sum of `total` over paid invoices.
pub fn total_revenue(invoices: &[Invoice]) -> f64 {
    invoices
        .iter()
        .filter(|inv| inv.status() == InvoiceStatus::Paid)
        .map(Invoice::total)
        .sum()
}

/// The most recently created invoices, newest first.
pub fn recent_invoices(invoices: &[Invoice], limit: usize) -> Vec<&Invoice> {
    let mut recent: Vec<&Invoice> = invoices.iter().collect();
    recent.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    recent.truncate(limit);
    recent
}
