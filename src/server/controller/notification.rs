use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        notification::{NotificationDto, UnreadCountDto},
    },
    server::{
        data::notification::NotificationRepository,
        error::{auth::AuthError, Error},
        model::{app::AppState, extract::AuthUser},
    },
};

pub static NOTIFICATION_TAG: &str = "notification";

/// List the authenticated user's notifications, newest first
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications, newest first", body = Vec<NotificationDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let notifications = NotificationRepository::new(&state.db)
        .list_by_user(auth.user_id)
        .await?;

    let notification_dtos: Vec<NotificationDto> = notifications
        .into_iter()
        .map(NotificationDto::from)
        .collect();

    Ok(Json(notification_dtos))
}

/// Count the authenticated user's unread notifications
#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Unread count", body = UnreadCountDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let unread = NotificationRepository::new(&state.db)
        .unread_count(auth.user_id)
        .await?;

    Ok(Json(UnreadCountDto { unread }))
}

/// Mark one of the authenticated user's notifications as read
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Updated notification", body = NotificationDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Notification belongs to another user", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let notification_repository = NotificationRepository::new(&state.db);

    let notification = notification_repository
        .get_by_id(notification_id)
        .await?
        .ok_or(Error::NotFound("Notification"))?;

    if notification.user_id != auth.user_id {
        return Err(AuthError::Forbidden(auth.user_id).into());
    }

    let notification = notification_repository
        .mark_read(notification_id)
        .await?
        .ok_or(Error::NotFound("Notification"))?;

    Ok(Json(NotificationDto::from(notification)))
}

/// Mark all of the authenticated user's notifications as read
#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "All notifications marked read"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    NotificationRepository::new(&state.db)
        .mark_all_read(auth.user_id)
        .await?;

    Ok(StatusCode::OK)
}
