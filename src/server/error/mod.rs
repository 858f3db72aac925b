//! Error types for the Alumnet server application.
//!
//! Domain-specific error enums (authentication, moderation, job board,
//! configuration) are aggregated into a single [`Error`] type. All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic definitions. Internal details are logged server-side; clients
//! only ever see the generic messages mapped here.

pub mod approval;
pub mod auth;
pub mod config;
pub mod job;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::{
    model::api::ErrorDto,
    server::error::{approval::ApprovalError, auth::AuthError, config::ConfigError, job::JobError},
};

/// Main error type for the Alumnet server application.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single unified error type, with `#[from]` conversions so the `?`
/// operator works throughout the service and data layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error (tokens, credentials, roles).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Moderation workflow error (unknown record, already decided, missing reason).
    #[error(transparent)]
    ApprovalError(#[from] ApprovalError),
    /// Job board error (ownership, accepting state, duplicate application).
    #[error(transparent)]
    JobError(#[from] JobError),
    /// Request payload failed a server-side validation rule.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// A record referenced by the request does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Password hashing error.
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
    /// Token signing error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures, missing denial reason
/// - 401 Unauthorized - Missing/invalid tokens, bad credentials
/// - 403 Forbidden - Inactive accounts, insufficient role, ownership failures
/// - 404 Not Found - Missing records
/// - 409 Conflict - Decisions on already-decided records, duplicate applications
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ApprovalError(err) => err.into_response(),
            Self::JobError(err) => err.into_response(),
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            Self::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{} not found", what),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

#[cfg(test)]
impl From<Error> for alumnet_test_utils::TestError {
    fn from(err: Error) -> Self {
        Self::Other(Box::new(err))
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic message
/// to the client to avoid exposing internal implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
