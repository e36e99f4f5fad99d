//! Infrastructure layer: the in-memory snapshot, the placeholder dataset and
//! the read-side queries the dashboard renders from.

pub mod dataset;
pub mod listing;
pub mod placeholder;
pub mod projections;
pub mod read_model;

#[cfg(test)]
pub(crate) mod test_support;

pub use dataset::Dataset;
pub use listing::InvoiceListing;
