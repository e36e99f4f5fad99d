use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::{dto, errors};
use crate::data::DashboardData;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_customers))
        .route("/filtered", get(filtered_customers))
}

pub async fn list_customers(
    Extension(data): Extension<Arc<DashboardData>>,
) -> axum::response::Response {
    match data.fetch_customers().await {
        Ok(items) => (StatusCode::OK, Json(dto::Items::from(items))).into_response(),
        Err(e) => errors::fetch_error_to_response(e),
    }
}

pub async fn filtered_customers(
    Extension(data): Extension<Arc<DashboardData>>,
    params: Result<Query<dto::SearchParams>, QueryRejection>,
) -> axum::response::Response {
    let Query(params) = match params {
        Ok(v) => v,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    match data.fetch_filtered_customers(&params.query).await {
        Ok(items) => (StatusCode::OK, Json(dto::Items::from(items))).into_response(),
        Err(e) => errors::fetch_error_to_response(e),
    }
}
