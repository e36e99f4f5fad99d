use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::listing::newest_first;

use super::display_id;

/// How many invoices the "latest invoices" card shows.
pub const LATEST_INVOICES_LIMIT: usize = 5;

/// Row in the latest-invoices card.
///
/// A missing customer renders as name `"Unknown"` with empty email and image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestInvoiceRow {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub email: String,
    /// Formatted currency, e.g. `$157.95`.
    pub amount: String,
}

/// Newest `limit` invoices joined with customer display fields.
pub fn latest_invoices(dataset: &Dataset, limit: usize) -> Vec<LatestInvoiceRow> {
    let mut invoices: Vec<_> = dataset.invoices().iter().collect();
    newest_first(&mut invoices);

    invoices
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, inv)| {
            let customer = dataset.customer(&inv.customer_id());
            LatestInvoiceRow {
                id: display_id(idx),
                name: customer.map_or_else(|| "Unknown".to_string(), |c| c.name().to_string()),
                image_url: customer.map(|c| c.image_url().to_string()).unwrap_or_default(),
                email: customer.map(|c| c.email().to_string()).unwrap_or_default(),
                amount: inv.amount().format_usd(),
            }
        })
        .collect()
}
