use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::enums::{ApprovalStatus, UserRole};

use crate::{
    model::{
        api::{DecisionReasonDto, ErrorDto},
        job::{
            ApplyToJobDto, JobApplicationDto, JobDto, PostJobDto, SetAcceptingDto,
            SetApplicationStatusDto,
        },
    },
    server::{
        data::job::JobRepository,
        error::Error,
        model::{app::AppState, extract::AuthUser},
        service::job::JobService,
    },
};

pub static JOB_TAG: &str = "job";

/// Post a job for moderation
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = JOB_TAG,
    request_body = PostJobDto,
    responses(
        (status = 201, description = "Job posted", body = JobDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a partner account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(posting): Json<PostJobDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_role(UserRole::Partner)?;

    let job = JobService::new(&state.db).post(auth.user_id, posting).await?;

    Ok((StatusCode::CREATED, Json(JobDto::from(job))))
}

/// List the public job board
///
/// Only approved postings that are currently accepting applications appear.
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = JOB_TAG,
    responses(
        (status = 200, description = "Open postings, newest first", body = Vec<JobDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job_board(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let jobs = JobRepository::new(&state.db).list_open().await?;

    let job_dtos: Vec<JobDto> = jobs.into_iter().map(JobDto::from).collect();

    Ok(Json(job_dtos))
}

/// List the authenticated partner's own postings, any status
#[utoipa::path(
    get,
    path = "/api/jobs/mine",
    tag = JOB_TAG,
    responses(
        (status = 200, description = "Own postings, newest first", body = Vec<JobDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a partner account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    auth.require_role(UserRole::Partner)?;

    let jobs = JobRepository::new(&state.db)
        .list_by_poster(auth.user_id)
        .await?;

    let job_dtos: Vec<JobDto> = jobs.into_iter().map(JobDto::from).collect();

    Ok(Json(job_dtos))
}

/// List postings awaiting moderation
#[utoipa::path(
    get,
    path = "/api/jobs/pending",
    tag = JOB_TAG,
    responses(
        (status = 200, description = "Pending postings, newest first", body = Vec<JobDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let jobs = JobRepository::new(&state.db)
        .list_by_status(ApprovalStatus::Pending)
        .await?;

    let job_dtos: Vec<JobDto> = jobs.into_iter().map(JobDto::from).collect();

    Ok(Json(job_dtos))
}

/// Approve a pending posting
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/approve",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job approved"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 409, description = "Job already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    JobService::new(&state.db).approve(job_id).await?;

    Ok(StatusCode::OK)
}

/// Deny a pending posting with a reason
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/deny",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    request_body = DecisionReasonDto,
    responses(
        (status = 200, description = "Job denied"),
        (status = 400, description = "Denial reason required", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 409, description = "Job already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deny_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<i32>,
    Json(decision): Json<DecisionReasonDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    JobService::new(&state.db)
        .deny(job_id, decision.reason)
        .await?;

    Ok(StatusCode::OK)
}

/// Open or close a posting for applications
#[utoipa::path(
    put,
    path = "/api/jobs/{id}/accepting",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    request_body = SetAcceptingDto,
    responses(
        (status = 200, description = "Updated posting", body = JobDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not the posting partner", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_job_accepting(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<i32>,
    Json(update): Json<SetAcceptingDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_role(UserRole::Partner)?;

    let job = JobService::new(&state.db)
        .set_accepting(auth.user_id, job_id, update.is_accepting)
        .await?;

    Ok(Json(JobDto::from(job)))
}

/// Apply to an open posting
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/apply",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    request_body = ApplyToJobDto,
    responses(
        (status = 201, description = "Application recorded", body = JobApplicationDto),
        (status = 400, description = "Posting is not open", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not an alumni account", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 409, description = "Already applied to this posting", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_to_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<i32>,
    Json(application): Json<ApplyToJobDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_role(UserRole::Alumni)?;

    let application = JobService::new(&state.db)
        .apply(auth.user_id, job_id, application.resume_key)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(JobApplicationDto::from(application)),
    ))
}

/// List applications to one of the authenticated partner's postings
#[utoipa::path(
    get,
    path = "/api/jobs/{id}/applications",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Applications for the posting", body = Vec<JobApplicationDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not the posting partner", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_role(UserRole::Partner)?;

    let applications = JobService::new(&state.db)
        .applications(auth.user_id, job_id)
        .await?;

    let application_dtos: Vec<JobApplicationDto> = applications
        .into_iter()
        .map(JobApplicationDto::from)
        .collect();

    Ok(Json(application_dtos))
}

/// Accept or reject an application, notifying the applicant
#[utoipa::path(
    put,
    path = "/api/jobs/applications/{id}/status",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    request_body = SetApplicationStatusDto,
    responses(
        (status = 200, description = "Updated application", body = JobApplicationDto),
        (status = 400, description = "Decision must be accepted or rejected", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not the posting partner", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_application_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(application_id): Path<i32>,
    Json(decision): Json<SetApplicationStatusDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_role(UserRole::Partner)?;

    let application = JobService::new(&state.db)
        .decide_application(auth.user_id, application_id, decision.status)
        .await?;

    Ok(Json(JobApplicationDto::from(application)))
}
