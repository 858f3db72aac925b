use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No access token cookie present on the request")]
    MissingToken,
    #[error("Access token failed validation: {0}")]
    InvalidToken(String),
    #[error("Token presented for the wrong use (expected {expected})")]
    WrongTokenUse { expected: &'static str },
    #[error("Username or password did not match")]
    InvalidCredentials,
    #[error("Account for user ID {0:?} is deactivated")]
    AccountInactive(i32),
    #[error("User ID {0:?} lacks the role required for this action")]
    Forbidden(i32),
    #[error("Username {0:?} is already registered")]
    UsernameTaken(String),
    #[error("User ID {0:?} not found in database despite presenting a valid token")]
    UserNotInDatabase(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::WrongTokenUse { .. } => {
                debug!("Authentication error: {}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccountInactive(user_id) => {
                debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Account is inactive".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Forbidden(user_id) => {
                debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UsernameTaken(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Username already taken".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(user_id) => {
                debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
