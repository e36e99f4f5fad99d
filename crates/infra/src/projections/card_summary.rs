use serde::{Deserialize, Serialize};

use dashboard_core::Money;
use dashboard_invoicing::InvoiceStatus;

use crate::dataset::Dataset;

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSummary {
    pub number_of_customers: usize,
    pub number_of_invoices: usize,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

impl CardSummary {
    pub fn summarize(dataset: &Dataset) -> Self {
        let total_for = |status: InvoiceStatus| -> Money {
            dataset
                .invoices()
                .iter()
                .filter(|inv| inv.status() == status)
                .map(|inv| inv.amount())
                .sum()
        };

        Self {
            number_of_customers: dataset.customers().len(),
            number_of_invoices: dataset.invoices().len(),
            total_paid_invoices: total_for(InvoiceStatus::Paid).format_usd(),
            total_pending_invoices: total_for(InvoiceStatus::Pending).format_usd(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::placeholder_dataset;

    #[test]
    fn summarizes_placeholder_data() {
        let ds = placeholder_dataset().unwrap();
        let cards = CardSummary::summarize(&ds);

        assert_eq!(cards.number_of_customers, 6);
        assert_eq!(cards.number_of_invoices, 13);
        // paid: 3040 + 44800 + 32545 + 1250 + 8546 + 500 + 8945 + 1000
        assert_eq!(cards.total_paid_invoices, "$1,006.26");
        // pending: 15795 + 20348 + 34577 + 54246 + 666
        assert_eq!(cards.total_pending_invoices, "$1,256.32");
    }

    #[test]
    fn empty_dataset_formats_zero_totals() {
        let cards = CardSummary::summarize(&Dataset::default());
        assert_eq!(cards.number_of_customers, 0);
        assert_eq!(cards.total_paid_invoices, "$0.00");
        assert_eq!(cards.total_pending_invoices, "$0.00");
    }
}
