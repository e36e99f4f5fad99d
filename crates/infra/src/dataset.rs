//! Immutable dashboard snapshot (customers, invoices, revenue).

use dashboard_core::{CustomerId, DomainResult};
use dashboard_customers::Customer;
use dashboard_invoicing::{Invoice, Revenue};

use crate::read_model::{InMemorySnapshotStore, SnapshotStore};

/// Fixed snapshot shared read-only for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    customers: InMemorySnapshotStore<Customer>,
    invoices: InMemorySnapshotStore<Invoice>,
    revenue: Vec<Revenue>,
}

impl Dataset {
    /// Assemble a snapshot. Record order is kept as given.
    ///
    /// Invoices may reference customers that are not part of the snapshot.
    pub fn new(
        customers: Vec<Customer>,
        invoices: Vec<Invoice>,
        revenue: Vec<Revenue>,
    ) -> DomainResult<Self> {
        let customers = InMemorySnapshotStore::from_records(customers)?;
        let invoices = InMemorySnapshotStore::from_records(invoices)?;

        let dangling = invoices
            .list()
            .iter()
            .filter(|inv| customers.get(&inv.customer_id()).is_none())
            .count();
        if dangling > 0 {
            tracing::warn!(dangling, "invoices reference customers missing from the snapshot");
        }

        Ok(Self {
            customers,
            invoices,
            revenue,
        })
    }

    pub fn customers(&self) -> &[Customer] {
        self.customers.list()
    }

    pub fn invoices(&self) -> &[Invoice] {
        self.invoices.list()
    }

    pub fn revenue(&self) -> &[Revenue] {
        &self.revenue
    }

    /// Customer joined to an invoice, if present.
    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.get(id)
    }
}
