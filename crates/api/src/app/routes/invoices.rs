use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use dashboard_core::InvoiceId;

use crate::app::{dto, errors};
use crate::data::DashboardData;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_invoices))
        .route("/latest", get(latest_invoices))
        .route("/pages", get(invoice_pages))
        .route("/:id", get(get_invoice))
}

pub async fn list_invoices(
    Extension(data): Extension<Arc<DashboardData>>,
    params: Result<Query<dto::InvoiceTableQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(params) = match params {
        Ok(v) => v,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    match data.fetch_filtered_invoices(&params.query, params.page()).await {
        Ok(rows) => (StatusCode::OK, Json(dto::Items::from(rows))).into_response(),
        Err(e) => errors::fetch_error_to_response(e),
    }
}

pub async fn latest_invoices(
    Extension(data): Extension<Arc<DashboardData>>,
) -> axum::response::Response {
    match data.fetch_latest_invoices().await {
        Ok(rows) => (StatusCode::OK, Json(dto::Items::from(rows))).into_response(),
        Err(e) => errors::fetch_error_to_response(e),
    }
}

pub async fn invoice_pages(
    Extension(data): Extension<Arc<DashboardData>>,
    params: Result<Query<dto::SearchParams>, QueryRejection>,
) -> axum::response::Response {
    let Query(params) = match params {
        Ok(v) => v,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    match data.fetch_invoices_pages(&params.query).await {
        Ok(pages) => (StatusCode::OK, Json(dto::PagesResponse { pages })).into_response(),
        Err(e) => errors::fetch_error_to_response(e),
    }
}

pub async fn get_invoice(
    Extension(data): Extension<Arc<DashboardData>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: InvoiceId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::invalid_id_to_response(e),
    };

    match data.fetch_invoice_by_id(id).await {
        Ok(form) => (StatusCode::OK, Json(form)).into_response(),
        Err(e) => errors::fetch_error_to_response(e),
    }
}
