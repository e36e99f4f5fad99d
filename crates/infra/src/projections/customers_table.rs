use serde::{Deserialize, Serialize};

use dashboard_core::CustomerId;
use dashboard_customers::Customer;

use crate::dataset::Dataset;
use crate::listing::SearchQuery;

/// Customer table row.
///
/// The aggregate columns are not computed from invoices; they are always
/// zero (`0`, `"0.00"`, `"0.00"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomersTableRow {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: u32,
    pub total_pending: String,
    pub total_paid: String,
}

impl From<&Customer> for CustomersTableRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id_typed(),
            name: c.name().to_string(),
            email: c.email().to_string(),
            image_url: c.image_url().to_string(),
            total_invoices: 0,
            total_pending: "0.00".to_string(),
            total_paid: "0.00".to_string(),
        }
    }
}

/// Customers whose name or email contains the query (case-insensitive), in
/// snapshot order.
pub fn filtered_customers(dataset: &Dataset, query: &str) -> Vec<CustomersTableRow> {
    let search = SearchQuery::new(query);
    let rows: Vec<_> = dataset
        .customers()
        .iter()
        .filter(|c| search.matches_customer(c))
        .map(CustomersTableRow::from)
        .collect();

    tracing::debug!(query = search.needle(), matched = rows.len(), "filtered customers");
    rows
}
