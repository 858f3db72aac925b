use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum JobError {
    #[error("Job ID {0:?} is not approved for the public board")]
    NotApproved(i32),
    #[error("Job ID {0:?} is not accepting applications")]
    NotAccepting(i32),
    #[error("User ID {applicant_id:?} has already applied to job ID {job_id:?}")]
    DuplicateApplication { job_id: i32, applicant_id: i32 },
    #[error("User ID {user_id:?} does not own job ID {job_id:?}")]
    NotOwner { job_id: i32, user_id: i32 },
}

impl IntoResponse for JobError {
    fn into_response(self) -> Response {
        match self {
            Self::NotApproved(_) | Self::NotAccepting(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "This job is not open for applications".to_string(),
                }),
            )
                .into_response(),
            Self::DuplicateApplication { .. } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "You have already applied to this job".to_string(),
                }),
            )
                .into_response(),
            Self::NotOwner { job_id, user_id } => {
                debug!(job_id = %job_id, user_id = %user_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to manage this job".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
