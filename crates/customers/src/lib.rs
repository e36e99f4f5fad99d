//! Customers domain module.
//!
//! Customers are read-only records owned by the dashboard snapshot; this crate
//! only defines their shape and construction rules (no IO, no storage).

pub mod customer;

pub use customer::{Customer, CustomerField};
