use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        upload::{PresignDto, PresignRequestDto},
    },
    server::{
        error::Error,
        model::{app::AppState, extract::AuthUser},
        service::upload::UploadService,
    },
};

pub static UPLOAD_TAG: &str = "upload";

/// Request a presigned upload URL
///
/// The client PUTs the object bytes directly to the returned URL and then
/// submits the `key` in the relevant form; file contents never pass through
/// the application.
#[utoipa::path(
    post,
    path = "/api/uploads/presign",
    tag = UPLOAD_TAG,
    request_body = PresignRequestDto,
    responses(
        (status = 200, description = "Presigned upload URL", body = PresignDto),
        (status = 400, description = "Unknown folder or unusable filename", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn presign_upload(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(request): Json<PresignRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let presigned = UploadService::new(&state.uploads).presign(request)?;

    Ok(Json(presigned))
}
