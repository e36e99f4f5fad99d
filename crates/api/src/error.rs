//! Fetch-level error returned by every data access call.

use thiserror::Error;

use dashboard_core::DomainError;

/// A data access call failed.
///
/// Displays as `Failed to fetch <resource>.`; the underlying cause is kept as
/// the error source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to fetch {resource}.")]
pub struct FetchError {
    resource: &'static str,
    #[source]
    cause: DomainError,
}

impl FetchError {
    pub fn new(resource: &'static str, cause: DomainError) -> Self {
        Self { resource, cause }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn cause(&self) -> &DomainError {
        &self.cause
    }
}

/// Resource names used in fetch error messages.
///
/// Only the invoice form lookup can fail; the other fetches read a snapshot
/// that is validated at load.
pub mod resource {
    pub const INVOICE: &str = "invoice";
}
