use axum::{Router, routing::get};

pub mod customers;
pub mod dashboard;
pub mod invoices;
pub mod system;

/// Router for all dashboard read endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/revenue", get(dashboard::revenue))
        .route("/cards", get(dashboard::cards))
        .nest("/invoices", invoices::router())
        .nest("/customers", customers::router())
}
