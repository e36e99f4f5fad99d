use dashboard_invoicing::Invoice;

use crate::dataset::Dataset;
use crate::projections::invoices_table::InvoicesTableRow;

use super::{PageRequest, SearchQuery, newest_first, page_count};

/// Invoice table listing over a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct InvoiceListing<'a> {
    dataset: &'a Dataset,
}

impl<'a> InvoiceListing<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    fn is_match(&self, search: &SearchQuery, invoice: &Invoice) -> bool {
        search.matches_invoice(invoice, self.dataset.customer(&invoice.customer_id()))
    }

    /// Every matching invoice, newest first.
    pub fn matching(&self, search: &SearchQuery) -> Vec<&'a Invoice> {
        let mut matched: Vec<&'a Invoice> = self
            .dataset
            .invoices()
            .iter()
            .filter(|inv| self.is_match(search, inv))
            .collect();
        newest_first(&mut matched);
        matched
    }

    /// One page of table rows. Row ids are `invoice-<absolute index>` within
    /// the filtered, sorted result and are not stable across queries.
    pub fn list(&self, query: &str, page: u32) -> Vec<InvoicesTableRow> {
        let search = SearchQuery::new(query);
        let request = PageRequest::new(page);
        let matched = self.matching(&search);
        let offset = request.offset().unwrap_or(0);

        let rows: Vec<_> = request
            .slice(&matched)
            .iter()
            .enumerate()
            .map(|(idx, inv)| {
                InvoicesTableRow::project(offset + idx, inv, self.dataset.customer(&inv.customer_id()))
            })
            .collect();

        tracing::debug!(
            query = search.needle(),
            page,
            matched = matched.len(),
            returned = rows.len(),
            "listed invoices"
        );
        rows
    }

    /// ceil(match count / page size).
    pub fn count_pages(&self, query: &str) -> u32 {
        let search = SearchQuery::new(query);
        let matched = self
            .dataset
            .invoices()
            .iter()
            .filter(|inv| self.is_match(&search, inv))
            .count();
        page_count(matched)
    }
}
