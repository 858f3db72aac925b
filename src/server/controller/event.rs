use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::enums::{ApprovalStatus, UserRole};

use crate::{
    model::{
        api::{BulkDecisionDto, BulkOutcomeDto, DecisionReasonDto, ErrorDto},
        event::{EventDto, SubmitEventDto},
    },
    server::{
        data::event::EventRepository,
        error::{approval::ApprovalError, Error},
        model::{app::AppState, extract::AuthUser},
        service::event::EventService,
    },
};

pub static EVENT_TAG: &str = "event";

/// Submit an event for moderation
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = SubmitEventDto,
    responses(
        (status = 201, description = "Event submitted", body = EventDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not an alumni account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(submission): Json<SubmitEventDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_role(UserRole::Alumni)?;

    let event = EventService::new(&state.db)
        .submit(auth.user_id, submission)
        .await?;

    Ok((StatusCode::CREATED, Json(EventDto::from(event))))
}

/// List approved events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Approved events, newest first", body = Vec<EventDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let events = EventRepository::new(&state.db)
        .list_by_status(ApprovalStatus::Approved)
        .await?;

    let event_dtos: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();

    Ok(Json(event_dtos))
}

/// List events awaiting moderation
#[utoipa::path(
    get,
    path = "/api/events/pending",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Pending events, newest first", body = Vec<EventDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_events(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let events = EventRepository::new(&state.db)
        .list_by_status(ApprovalStatus::Pending)
        .await?;

    let event_dtos: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();

    Ok(Json(event_dtos))
}

/// Approve a pending event
#[utoipa::path(
    post,
    path = "/api/events/{id}/approve",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event approved"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    EventService::new(&state.db).approve(event_id).await?;

    Ok(StatusCode::OK)
}

/// Deny a pending event with a reason
#[utoipa::path(
    post,
    path = "/api/events/{id}/deny",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = DecisionReasonDto,
    responses(
        (status = 200, description = "Event denied"),
        (status = 400, description = "Denial reason required", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deny_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<i32>,
    Json(decision): Json<DecisionReasonDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    EventService::new(&state.db)
        .deny(event_id, decision.reason)
        .await?;

    Ok(StatusCode::OK)
}

/// Approve a batch of pending events
#[utoipa::path(
    post,
    path = "/api/events/approve",
    tag = EVENT_TAG,
    request_body = BulkDecisionDto,
    responses(
        (status = 200, description = "Per-event outcome", body = BulkOutcomeDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_events(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(decision): Json<BulkDecisionDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let outcome = EventService::new(&state.db)
        .approve_bulk(&decision.ids)
        .await?;

    Ok(Json(BulkOutcomeDto {
        succeeded: outcome.succeeded,
        failed: outcome.failed,
        failed_ids: outcome.failed_ids,
    }))
}

/// Deny a batch of pending events with one shared reason
#[utoipa::path(
    post,
    path = "/api/events/deny",
    tag = EVENT_TAG,
    request_body = BulkDecisionDto,
    responses(
        (status = 200, description = "Per-event outcome", body = BulkOutcomeDto),
        (status = 400, description = "Denial reason required", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deny_events(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(decision): Json<BulkDecisionDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let reason = decision.reason.ok_or(ApprovalError::ReasonRequired)?;

    let outcome = EventService::new(&state.db)
        .deny_bulk(&decision.ids, reason)
        .await?;

    Ok(Json(BulkOutcomeDto {
        succeeded: outcome.succeeded,
        failed: outcome.failed,
        failed_ids: outcome.failed_ids,
    }))
}
