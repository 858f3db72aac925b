use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ApprovalError {
    #[error("{label} ID {id:?} not found")]
    NotFound { label: &'static str, id: i32 },
    /// Transitions are terminal; a second decision on the same record is a
    /// conflict and must not insert another notification.
    #[error("{label} ID {id:?} has already been decided")]
    AlreadyDecided { label: &'static str, id: i32 },
    #[error("A denial requires a non-empty reason")]
    ReasonRequired,
}

impl IntoResponse for ApprovalError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { label, .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{} not found", label),
                }),
            )
                .into_response(),
            Self::AlreadyDecided { label, id } => {
                debug!(id = %id, "{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: format!("{} has already been decided", label),
                    }),
                )
                    .into_response()
            }
            Self::ReasonRequired => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "A reason is required to deny a submission".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
