//! UI-shaped read models derived from the snapshot.

pub mod card_summary;
pub mod customers_table;
pub mod invoice_form;
pub mod invoices_table;
pub mod latest_invoices;

pub use card_summary::CardSummary;
pub use customers_table::{CustomersTableRow, filtered_customers};
pub use invoice_form::InvoiceForm;
pub use invoices_table::InvoicesTableRow;
pub use latest_invoices::{LATEST_INVOICES_LIMIT, LatestInvoiceRow, latest_invoices};

/// Display id for a projected row: `invoice-<position>`.
pub fn display_id(position: usize) -> String {
    format!("invoice-{position}")
}
