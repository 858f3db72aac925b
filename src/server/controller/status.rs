use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::model::api::ServerTimeDto;

pub static STATUS_TAG: &str = "status";

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Service is up")
    ),
)]
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Current server clock
///
/// Clients validate deadlines against this value instead of trusting the
/// local clock.
#[utoipa::path(
    get,
    path = "/api/time",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Current server time", body = ServerTimeDto)
    ),
)]
pub async fn server_time() -> impl IntoResponse {
    Json(ServerTimeDto {
        now: Utc::now().naive_utc(),
    })
}
