//! Invoicing domain module.
//!
//! Invoice and revenue records as seen by the dashboard. Everything here is
//! read-only, deterministic domain logic (no IO, no HTTP, no storage).

pub mod invoice;
pub mod revenue;

pub use invoice::{DATE_FORMAT, Invoice, InvoiceStatus};
pub use revenue::Revenue;
