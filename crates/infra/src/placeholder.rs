//! Built-in placeholder snapshot standing in for a real store.

use uuid::Uuid;

use dashboard_core::{CustomerId, DomainError, DomainResult, InvoiceId, Money};
use dashboard_customers::Customer;
use dashboard_invoicing::{Invoice, InvoiceStatus, Revenue};

use crate::dataset::Dataset;

/// (id, name, email, image_url)
const CUSTOMERS: &[(&str, &str, &str, &str)] = &[
    (
        "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa",
        "Evil Rabbit",
        "evil@rabbit.com",
        "/customers/evil-rabbit.png",
    ),
    (
        "3958dc9e-712f-4377-85e9-fec4b6a6442a",
        "Delba de Oliveira",
        "delba@oliveira.com",
        "/customers/delba-de-oliveira.png",
    ),
    (
        "3958dc9e-742f-4377-85e9-fec4b6a6442a",
        "Lee Robinson",
        "lee@robinson.com",
        "/customers/lee-robinson.png",
    ),
    (
        "76d65c26-f784-44a2-ac19-586678f7c2f2",
        "Michael Novotny",
        "michael@novotny.com",
        "/customers/michael-novotny.png",
    ),
    (
        "CC27C14A-0ACF-4F4A-A6C9-D45682C144B9",
        "Amy Burns",
        "amy@burns.com",
        "/customers/amy-burns.png",
    ),
    (
        "13D07535-C59E-4157-A011-F8D2EF4E0CBB",
        "Balazs Orban",
        "balazs@orban.com",
        "/customers/balazs-orban.png",
    ),
];

/// (customer index, amount in cents, status, date)
const INVOICES: &[(usize, u64, InvoiceStatus, &str)] = &[
    (0, 15795, InvoiceStatus::Pending, "2022-12-06"),
    (1, 20348, InvoiceStatus::Pending, "2022-11-14"),
    (4, 3040, InvoiceStatus::Paid, "2022-10-29"),
    (3, 44800, InvoiceStatus::Paid, "2023-09-10"),
    (5, 34577, InvoiceStatus::Pending, "2023-08-05"),
    (2, 54246, InvoiceStatus::Pending, "2023-07-16"),
    (0, 666, InvoiceStatus::Pending, "2023-06-27"),
    (3, 32545, InvoiceStatus::Paid, "2023-06-09"),
    (4, 1250, InvoiceStatus::Paid, "2023-06-17"),
    (5, 8546, InvoiceStatus::Paid, "2023-06-07"),
    (1, 500, InvoiceStatus::Paid, "2023-08-19"),
    (5, 8945, InvoiceStatus::Paid, "2023-06-03"),
    (2, 1000, InvoiceStatus::Paid, "2022-06-05"),
];

const REVENUE: &[(&str, u64)] = &[
    ("Jan", 2000),
    ("Feb", 1800),
    ("Mar", 2200),
    ("Apr", 2500),
    ("May", 2300),
    ("Jun", 3200),
    ("Jul", 3500),
    ("Aug", 3700),
    ("Sep", 2500),
    ("Oct", 2800),
    ("Nov", 3000),
    ("Dec", 4800),
];

/// Invoice ids are not part of the source data; derive stable ones from position.
const INVOICE_ID_BASE: u128 = 0x0190_0000_0000_7000_8000_0000_0000_0000;

/// Load the built-in snapshot.
pub fn placeholder_dataset() -> DomainResult<Dataset> {
    let customers = CUSTOMERS
        .iter()
        .map(|(id, name, email, image_url)| -> DomainResult<Customer> {
            Customer::new(id.parse()?, *name, *email, *image_url)
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let invoices = INVOICES
        .iter()
        .enumerate()
        .map(|(pos, (customer, amount, status, date))| -> DomainResult<Invoice> {
            let customer_id: CustomerId = customers
                .get(*customer)
                .map(Customer::id_typed)
                .ok_or_else(|| DomainError::invariant(format!("no customer at index {customer}")))?;
            Ok(Invoice::new(
                InvoiceId::from_uuid(Uuid::from_u128(INVOICE_ID_BASE + pos as u128 + 1)),
                customer_id,
                Money::from_cents(*amount),
                Invoice::parse_date(date)?,
                *status,
            ))
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let revenue = REVENUE
        .iter()
        .map(|(month, revenue)| Revenue::new(*month, *revenue))
        .collect();

    let dataset = Dataset::new(customers, invoices, revenue)?;
    tracing::debug!(
        customers = dataset.customers().len(),
        invoices = dataset.invoices().len(),
        "placeholder dataset loaded"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_expected_counts() {
        let ds = placeholder_dataset().unwrap();
        assert_eq!(ds.customers().len(), 6);
        assert_eq!(ds.invoices().len(), 13);
        assert_eq!(ds.revenue().len(), 12);
    }

    #[test]
    fn every_invoice_joins_a_customer() {
        let ds = placeholder_dataset().unwrap();
        for inv in ds.invoices() {
            assert!(ds.customer(&inv.customer_id()).is_some());
        }
    }

    #[test]
    fn invoice_ids_are_unique_and_stable() {
        let a = placeholder_dataset().unwrap();
        let b = placeholder_dataset().unwrap();
        let ids_a: Vec<_> = a.invoices().iter().map(|i| i.id_typed()).collect();
        let ids_b: Vec<_> = b.invoices().iter().map(|i| i.id_typed()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn first_customer_is_evil_rabbit() {
        let ds = placeholder_dataset().unwrap();
        assert_eq!(ds.customers()[0].name(), "Evil Rabbit");
        assert_eq!(ds.revenue()[11].month, "Dec");
        assert_eq!(ds.revenue()[11].revenue, 4800);
    }
}
