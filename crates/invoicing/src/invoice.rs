use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dashboard_core::{CustomerId, DomainError, DomainResult, Entity, InvoiceId, Money};

/// Calendar date format used for invoice dates on the wire and in search.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Invoice status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(DomainError::validation(format!(
                "status must be one of: pending, paid (got {other:?})"
            ))),
        }
    }
}

/// Invoice record.
///
/// `customer_id` is a plain reference; the customer may be absent from the
/// snapshot, in which case joins fall back to call-site defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    id: InvoiceId,
    customer_id: CustomerId,
    amount: Money,
    date: NaiveDate,
    status: InvoiceStatus,
}

impl Invoice {
    pub fn new(
        id: InvoiceId,
        customer_id: CustomerId,
        amount: Money,
        date: NaiveDate,
        status: InvoiceStatus,
    ) -> Self {
        Self {
            id,
            customer_id,
            amount,
            date,
            status,
        }
    }

    /// Parse a `YYYY-MM-DD` calendar date.
    pub fn parse_date(s: &str) -> DomainResult<NaiveDate> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|e| DomainError::validation(format!("invalid invoice date {s:?}: {e}")))
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Date rendered as `YYYY-MM-DD`.
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_invoice(date: &str, status: InvoiceStatus) -> Invoice {
        Invoice::new(
            InvoiceId::new(),
            CustomerId::new(),
            Money::from_cents(15795),
            Invoice::parse_date(date).unwrap(),
            status,
        )
    }

    #[test]
    fn date_label_is_zero_padded_iso() {
        let inv = test_invoice("2022-06-05", InvoiceStatus::Paid);
        assert_eq!(inv.date_label(), "2022-06-05");
        assert_eq!(inv.status(), InvoiceStatus::Paid);
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        let err = Invoice::parse_date("06/05/2022").unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("invalid invoice date") => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn status_round_trips_through_text() {
        assert_eq!("pending".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Pending);
        assert_eq!(InvoiceStatus::Paid.to_string(), "paid");
        assert!("Paid".parse::<InvoiceStatus>().is_err());
        assert_eq!(
            serde_json::to_value(InvoiceStatus::Pending).unwrap(),
            serde_json::json!("pending")
        );
    }

    #[test]
    fn dates_order_chronologically() {
        let older = test_invoice("2022-12-06", InvoiceStatus::Pending);
        let newer = test_invoice("2023-01-01", InvoiceStatus::Pending);
        assert!(newer.date() > older.date());
    }
}
