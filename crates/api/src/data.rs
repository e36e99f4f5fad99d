//! Async fetch surface over the dashboard snapshot.
//!
//! The snapshot is static, so every call resolves immediately; the async
//! signatures keep parity with callers written against a networked store.

use std::sync::Arc;

use dashboard_core::{DomainError, DomainResult, InvoiceId};
use dashboard_customers::CustomerField;
use dashboard_infra::Dataset;
use dashboard_infra::listing::InvoiceListing;
use dashboard_infra::placeholder::placeholder_dataset;
use dashboard_infra::projections::{
    CardSummary, CustomersTableRow, InvoiceForm, InvoicesTableRow, LATEST_INVOICES_LIMIT,
    LatestInvoiceRow, filtered_customers, latest_invoices,
};
use dashboard_invoicing::Revenue;

use crate::error::{FetchError, resource};

/// Read-only dashboard data service.
#[derive(Debug, Clone)]
pub struct DashboardData {
    dataset: Arc<Dataset>,
}

fn fetch_failed(resource: &'static str) -> impl FnOnce(DomainError) -> FetchError {
    move |cause| {
        tracing::error!(error = %cause, resource, "data access failed");
        FetchError::new(resource, cause)
    }
}

impl DashboardData {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Service over the built-in placeholder snapshot.
    pub fn placeholder() -> DomainResult<Self> {
        Ok(Self::new(placeholder_dataset()?))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub async fn fetch_revenue(&self) -> Result<Vec<Revenue>, FetchError> {
        Ok(self.dataset.revenue().to_vec())
    }

    /// Five newest invoices joined with customer display fields.
    pub async fn fetch_latest_invoices(&self) -> Result<Vec<LatestInvoiceRow>, FetchError> {
        Ok(latest_invoices(&self.dataset, LATEST_INVOICES_LIMIT))
    }

    pub async fn fetch_card_data(&self) -> Result<CardSummary, FetchError> {
        Ok(CardSummary::summarize(&self.dataset))
    }

    /// One page (6 rows) of the invoice table for `query`.
    pub async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<InvoicesTableRow>, FetchError> {
        Ok(InvoiceListing::new(&self.dataset).list(query, page))
    }

    pub async fn fetch_invoices_pages(&self, query: &str) -> Result<u32, FetchError> {
        Ok(InvoiceListing::new(&self.dataset).count_pages(query))
    }

    /// Placeholder edit form; does not look the invoice up.
    pub async fn fetch_invoice_by_id(&self, id: InvoiceId) -> Result<InvoiceForm, FetchError> {
        InvoiceForm::placeholder(&self.dataset, id).map_err(fetch_failed(resource::INVOICE))
    }

    pub async fn fetch_customers(&self) -> Result<Vec<CustomerField>, FetchError> {
        Ok(self.dataset.customers().iter().map(|c| c.field()).collect())
    }

    pub async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomersTableRow>, FetchError> {
        Ok(filtered_customers(&self.dataset, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::{CustomerId, Money};
    use dashboard_customers::Customer;
    use dashboard_invoicing::{Invoice, InvoiceStatus};

    fn data() -> DashboardData {
        DashboardData::placeholder().unwrap()
    }

    #[tokio::test]
    async fn revenue_covers_twelve_months() {
        let revenue = data().fetch_revenue().await.unwrap();
        assert_eq!(revenue.len(), 12);
        assert_eq!(revenue[0], Revenue::new("Jan", 2000));
    }

    #[tokio::test]
    async fn latest_invoices_are_the_newest_five() {
        let svc = data();
        let rows = svc.fetch_latest_invoices().await.unwrap();
        assert_eq!(rows.len(), 5);

        let mut invoices: Vec<_> = svc.dataset().invoices().iter().collect();
        invoices.sort_by(|a, b| b.date().cmp(&a.date()));
        let expected: Vec<_> = invoices.iter().take(5).map(|i| i.amount().format_usd()).collect();
        let amounts: Vec<_> = rows.iter().map(|r| r.amount.clone()).collect();
        assert_eq!(amounts, expected);
        assert_eq!(amounts[0], "$448.00");
    }

    #[tokio::test]
    async fn page_count_for_empty_query_covers_all_invoices() {
        let svc = data();
        let total = svc.dataset().invoices().len();
        let pages = svc.fetch_invoices_pages("").await.unwrap();
        assert_eq!(pages as usize, total.div_ceil(6));
    }

    #[tokio::test]
    async fn filtered_invoices_respect_page_size() {
        let svc = data();
        let rows = svc.fetch_filtered_invoices("", 1).await.unwrap();
        assert_eq!(rows.len(), 6);
        let rows = svc.fetch_filtered_invoices("pending", 1).await.unwrap();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.status == InvoiceStatus::Pending));
    }

    #[tokio::test]
    async fn invoice_by_id_is_a_stub() {
        let svc = data();
        let real = svc.dataset().invoices()[0].clone();

        let form = svc.fetch_invoice_by_id(real.id_typed()).await.unwrap();
        assert_eq!(form.id, real.id_typed());
        assert_eq!(form.amount, Money::ZERO);
        assert_eq!(form.status, InvoiceStatus::Pending);
        assert_eq!(form.customer_id, svc.dataset().customers()[0].id_typed());
    }

    #[tokio::test]
    async fn invoice_by_id_fails_without_customers() {
        let svc = DashboardData::new(Dataset::default());
        let err = svc.fetch_invoice_by_id(InvoiceId::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch invoice.");
        assert_eq!(err.cause(), &DomainError::NotFound);
    }

    #[tokio::test]
    async fn customers_keep_snapshot_order() {
        let svc = data();
        let fields = svc.fetch_customers().await.unwrap();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0].name, "Evil Rabbit");
        assert_eq!(fields[5].name, "Balazs Orban");
    }

    #[tokio::test]
    async fn filtered_customers_on_custom_snapshot() {
        let a = Customer::new(CustomerId::new(), "Ada Lovelace", "ada@example.com", "").unwrap();
        let b = Customer::new(CustomerId::new(), "Grace Hopper", "grace@navy.mil", "").unwrap();
        let inv = Invoice::new(
            InvoiceId::new(),
            a.id_typed(),
            Money::from_cents(100),
            Invoice::parse_date("2024-01-01").unwrap(),
            InvoiceStatus::Paid,
        );
        let svc = DashboardData::new(Dataset::new(vec![a, b], vec![inv], vec![]).unwrap());

        let rows = svc.fetch_filtered_customers("NAVY").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Grace Hopper");
        assert_eq!(rows[0].total_invoices, 0);
    }
}
