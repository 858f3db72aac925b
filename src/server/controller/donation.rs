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
        donation::{DonationDriveDto, SubmitDonationDriveDto},
    },
    server::{
        data::donation::DonationDriveRepository,
        error::{approval::ApprovalError, Error},
        model::{app::AppState, extract::AuthUser},
        service::donation::DonationDriveService,
    },
};

pub static DONATION_TAG: &str = "donation";

/// Submit a donation drive for moderation
#[utoipa::path(
    post,
    path = "/api/donation-drives",
    tag = DONATION_TAG,
    request_body = SubmitDonationDriveDto,
    responses(
        (status = 201, description = "Donation drive submitted", body = DonationDriveDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not an alumni account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_donation_drive(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(submission): Json<SubmitDonationDriveDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_role(UserRole::Alumni)?;

    let drive = DonationDriveService::new(&state.db)
        .submit(auth.user_id, submission)
        .await?;

    Ok((StatusCode::CREATED, Json(DonationDriveDto::from(drive))))
}

/// List approved donation drives
#[utoipa::path(
    get,
    path = "/api/donation-drives",
    tag = DONATION_TAG,
    responses(
        (status = 200, description = "Approved donation drives, newest first", body = Vec<DonationDriveDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_donation_drives(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let drives = DonationDriveRepository::new(&state.db)
        .list_by_status(ApprovalStatus::Approved)
        .await?;

    let drive_dtos: Vec<DonationDriveDto> =
        drives.into_iter().map(DonationDriveDto::from).collect();

    Ok(Json(drive_dtos))
}

/// List donation drives awaiting moderation
#[utoipa::path(
    get,
    path = "/api/donation-drives/pending",
    tag = DONATION_TAG,
    responses(
        (status = 200, description = "Pending donation drives, newest first", body = Vec<DonationDriveDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_donation_drives(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let drives = DonationDriveRepository::new(&state.db)
        .list_by_status(ApprovalStatus::Pending)
        .await?;

    let drive_dtos: Vec<DonationDriveDto> =
        drives.into_iter().map(DonationDriveDto::from).collect();

    Ok(Json(drive_dtos))
}

/// Approve a pending donation drive
#[utoipa::path(
    post,
    path = "/api/donation-drives/{id}/approve",
    tag = DONATION_TAG,
    params(
        ("id" = i32, Path, description = "Donation drive ID")
    ),
    responses(
        (status = 200, description = "Donation drive approved"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Donation drive not found", body = ErrorDto),
        (status = 409, description = "Donation drive already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_donation_drive(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(drive_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    DonationDriveService::new(&state.db).approve(drive_id).await?;

    Ok(StatusCode::OK)
}

/// Deny a pending donation drive with a reason
#[utoipa::path(
    post,
    path = "/api/donation-drives/{id}/deny",
    tag = DONATION_TAG,
    params(
        ("id" = i32, Path, description = "Donation drive ID")
    ),
    request_body = DecisionReasonDto,
    responses(
        (status = 200, description = "Donation drive denied"),
        (status = 400, description = "Denial reason required", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Donation drive not found", body = ErrorDto),
        (status = 409, description = "Donation drive already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deny_donation_drive(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(drive_id): Path<i32>,
    Json(decision): Json<DecisionReasonDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    DonationDriveService::new(&state.db)
        .deny(drive_id, decision.reason)
        .await?;

    Ok(StatusCode::OK)
}

/// Approve a batch of pending donation drives
#[utoipa::path(
    post,
    path = "/api/donation-drives/approve",
    tag = DONATION_TAG,
    request_body = BulkDecisionDto,
    responses(
        (status = 200, description = "Per-drive outcome", body = BulkOutcomeDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_donation_drives(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(decision): Json<BulkDecisionDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let outcome = DonationDriveService::new(&state.db)
        .approve_bulk(&decision.ids)
        .await?;

    Ok(Json(BulkOutcomeDto {
        succeeded: outcome.succeeded,
        failed: outcome.failed,
        failed_ids: outcome.failed_ids,
    }))
}

/// Deny a batch of pending donation drives with one shared reason
#[utoipa::path(
    post,
    path = "/api/donation-drives/deny",
    tag = DONATION_TAG,
    request_body = BulkDecisionDto,
    responses(
        (status = 200, description = "Per-drive outcome", body = BulkOutcomeDto),
        (status = 400, description = "Denial reason required", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deny_donation_drives(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(decision): Json<BulkDecisionDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let reason = decision.reason.ok_or(ApprovalError::ReasonRequired)?;

    let outcome = DonationDriveService::new(&state.db)
        .deny_bulk(&decision.ids, reason)
        .await?;

    Ok(Json(BulkOutcomeDto {
        succeeded: outcome.succeeded,
        failed: outcome.failed,
        failed_ids: outcome.failed_ids,
    }))
}
