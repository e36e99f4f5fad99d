use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use dashboard_core::DomainError;

use crate::error::FetchError;

pub fn fetch_error_to_response(err: FetchError) -> axum::response::Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "fetch_error", err.to_string())
}

/// Path ids are parsed with `FromStr`, which only fails with `InvalidId`.
pub fn invalid_id_to_response(err: DomainError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_id", err.to_string())
}

pub fn query_rejection_to_response(rejection: QueryRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_query", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
