use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dashboard_core::{CustomerId, Money};
use dashboard_customers::Customer;
use dashboard_invoicing::{Invoice, InvoiceStatus};

use super::display_id;

/// Invoice table row: invoice joined with its customer.
///
/// `id` is a display id, not the invoice id. Missing customers render as
/// empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoicesTableRow {
    pub id: String,
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: NaiveDate,
    /// Cents, unformatted.
    pub amount: Money,
    pub status: InvoiceStatus,
}

impl InvoicesTableRow {
    pub fn project(position: usize, invoice: &Invoice, customer: Option<&Customer>) -> Self {
        Self {
            id: display_id(position),
            customer_id: invoice.customer_id(),
            name: customer.map(|c| c.name().to_string()).unwrap_or_default(),
            email: customer.map(|c| c.email().to_string()).unwrap_or_default(),
            image_url: customer.map(|c| c.image_url().to_string()).unwrap_or_default(),
            date: invoice.date(),
            amount: invoice.amount(),
            status: invoice.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::InvoiceId;

    #[test]
    fn serializes_with_plain_amount_and_iso_date() {
        let c = Customer::new(CustomerId::new(), "Amy Burns", "amy@burns.com", "/customers/amy-burns.png")
            .unwrap();
        let inv = Invoice::new(
            InvoiceId::new(),
            c.id_typed(),
            Money::from_cents(3040),
            Invoice::parse_date("2022-10-29").unwrap(),
            InvoiceStatus::Paid,
        );

        let row = InvoicesTableRow::project(7, &inv, Some(&c));
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["id"], "invoice-7");
        assert_eq!(json["customer_id"], c.id_typed().to_string());
        assert_eq!(json["name"], "Amy Burns");
        assert_eq!(json["date"], "2022-10-29");
        assert_eq!(json["amount"], 3040);
        assert_eq!(json["status"], "paid");
    }
}
