//! Dashboard data access: async fetch surface plus an HTTP JSON read API.

pub mod app;
pub mod config;
pub mod data;
pub mod error;

pub use config::ApiConfig;
pub use data::DashboardData;
pub use error::FetchError;
