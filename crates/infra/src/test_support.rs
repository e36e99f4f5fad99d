//! Shared proptest strategies for infra tests.

use dashboard_core::{CustomerId, InvoiceId, Money};
use dashboard_customers::Customer;
use dashboard_invoicing::{Invoice, InvoiceStatus};
use proptest::prelude::*;

use crate::dataset::Dataset;

/// Snapshot of 1-4 customers and up to 39 invoices. Dates repeat often enough
/// to exercise tie ordering, and some invoices reference missing customers.
pub(crate) fn arb_dataset() -> impl Strategy<Value = Dataset> {
    let names = prop::sample::select(vec!["Ada", "Grace", "Linus", "Barbara"]);
    let row = (
        0usize..5,
        0u64..100_000,
        (2020i32..2024, 1u32..13, 1u32..29),
        any::<bool>(),
    );
    (prop::collection::vec(names, 1..5), prop::collection::vec(row, 0..40)).prop_map(
        |(names, rows)| {
            let customers: Vec<Customer> = names
                .iter()
                .map(|n| {
                    Customer::new(CustomerId::new(), *n, format!("{}@example.com", n.to_lowercase()), "")
                        .unwrap()
                })
                .collect();
            let invoices = rows
                .into_iter()
                .map(|(ci, cents, (y, m, d), paid)| {
                    // Index past the customer list produces a dangling reference.
                    let customer_id = customers
                        .get(ci)
                        .map(|c| c.id_typed())
                        .unwrap_or_else(CustomerId::new);
                    let status = if paid { InvoiceStatus::Paid } else { InvoiceStatus::Pending };
                    Invoice::new(
                        InvoiceId::new(),
                        customer_id,
                        Money::from_cents(cents),
                        Invoice::parse_date(&format!("{y:04}-{m:02}-{d:02}")).unwrap(),
                        status,
                    )
                })
                .collect();
            Dataset::new(customers, invoices, vec![]).unwrap()
        },
    )
}
