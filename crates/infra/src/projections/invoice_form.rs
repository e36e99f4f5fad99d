use serde::{Deserialize, Serialize};

use dashboard_core::{CustomerId, DomainError, DomainResult, InvoiceId, Money};
use dashboard_invoicing::InvoiceStatus;

use crate::dataset::Dataset;

/// Edit-form view of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceForm {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub amount: Money,
    pub status: InvoiceStatus,
}

impl InvoiceForm {
    /// Placeholder form for `id`.
    ///
    /// This is not a lookup: the id is echoed back with the first customer,
    /// a zero amount and pending status. Fails when the snapshot has no
    /// customers.
    pub fn placeholder(dataset: &Dataset, id: InvoiceId) -> DomainResult<Self> {
        let customer = dataset
            .customers()
            .first()
            .ok_or_else(DomainError::not_found)?;

        Ok(Self {
            id,
            customer_id: customer.id_typed(),
            amount: Money::ZERO,
            status: InvoiceStatus::Pending,
        })
    }
}
