//! Query-filtered, date-sorted, paginated listings.
//!
//! Pipeline: filter → sort → paginate → project.

pub mod invoices;
pub mod pagination;
pub mod search;

pub use invoices::InvoiceListing;
pub use pagination::{ITEMS_PER_PAGE, PageRequest, page_count};
pub use search::SearchQuery;

use dashboard_invoicing::Invoice;

/// Sort newest first. The sort is stable, so invoices sharing a date keep
/// their snapshot order.
pub fn newest_first(invoices: &mut [&Invoice]) {
    invoices.sort_by(|a, b| b.date().cmp(&a.date()));
}
