use billfold_invoicing::{Invoice, InvoiceStatus};

/// Status filter for the invoice list: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(InvoiceStatus),
}

impl StatusFilter {
    pub fn matches(self, status: InvoiceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

/// Filter a snapshot by status and a case-insensitive search over invoice
/// number and client name. An empty search term matches everything.
pub fn filter_invoices<'a>(
    invoices: &'a [Invoice],
    filter: StatusFilter,
    search: &str,
) -> Vec<&'a Invoice> {
    let needle = search.to_lowercase();
    invoices
        .iter()
        .filter(|inv| {
            filter.matches(inv.status())
                && (needle.is_empty()
                    || inv.invoice_number().to_lowercase().contains(&needle)
                    || inv.client_name().to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use billfold_core::InvoiceId;
    use billfold_invoicing::{Invoice, InvoiceDraft, InvoiceStatus};
    use chrono::{DateTime, NaiveDate, Utc};

    /// An invoice totalling 100.0 with the given status and creation time.
    pub(crate) fn invoice_with_status(
        number: &str,
        client: &str,
        status: InvoiceStatus,
        created_at: DateTime<Utc>,
    ) -> Invoice {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut draft = InvoiceDraft::new(number, date, date);
        draft.client_name = client.to_string();
        draft.item_mut(0).unwrap().set_unit_price(100.0);
        draft
            .finalize(InvoiceId::new(), created_at)
            .unwrap()
            .with_status(status, created_at)
    }
}
