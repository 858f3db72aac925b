use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use entity::enums::UserRole;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        stats::{DashboardStatsDto, StatsRangeDto},
        user::{SetActiveDto, UserDto},
    },
    server::{
        data::user::UserRepository,
        error::Error,
        model::{app::AppState, extract::AuthUser},
        service::stats::StatsService,
    },
};

pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct UserListParams {
    /// Restrict the listing to a single role.
    pub role: Option<UserRole>,
}

/// List accounts, optionally filtered by role
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(UserListParams),
    responses(
        (status = 200, description = "Accounts, newest first", body = Vec<UserDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let users = UserRepository::new(&state.db).list(params.role).await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok(Json(user_dtos))
}

/// Activate or deactivate an account
///
/// Deactivation blocks future logins and refreshes; an access token already
/// in flight remains valid until it expires.
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/active",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = SetActiveDto,
    responses(
        (status = 200, description = "Updated account", body = UserDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_user_active(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i32>,
    Json(update): Json<SetActiveDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let user = UserRepository::new(&state.db)
        .set_active(user_id, update.is_active)
        .await?
        .ok_or(Error::NotFound("User"))?;

    Ok(Json(UserDto::from(user)))
}

/// Dashboard counters for an inclusive date range
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    params(StatsRangeDto),
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardStatsDto),
        (status = 400, description = "Inverted date range", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(range): Query<StatsRangeDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let stats = StatsService::new(&state.db)
        .dashboard(range.from, range.to)
        .await?;

    Ok(Json(stats))
}
