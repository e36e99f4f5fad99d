use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::{dto, errors};
use crate::data::DashboardData;

pub async fn revenue(Extension(data): Extension<Arc<DashboardData>>) -> axum::response::Response {
    match data.fetch_revenue().await {
        Ok(items) => (StatusCode::OK, Json(dto::Items::from(items))).into_response(),
        Err(e) => errors::fetch_error_to_response(e),
    }
}

pub async fn cards(Extension(data): Extension<Arc<DashboardData>>) -> axum::response::Response {
    match data.fetch_card_data().await {
        Ok(cards) => (StatusCode::OK, Json(cards)).into_response(),
        Err(e) => errors::fetch_error_to_response(e),
    }
}
