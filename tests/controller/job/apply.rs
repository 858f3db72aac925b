//! Tests for the job application endpoint.

use alumnet::{
    model::job::ApplyToJobDto,
    server::{
        controller::job::apply_to_job,
        model::{app::AppState, extract::AuthUser},
    },
};
use alumnet_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::enums::{ApprovalStatus, UserRole};

/// Tests that an alumnus can apply to an open posting.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn success_creates_application() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::Job,
        entity::prelude::JobApplication
    )?;

    let partner = factory::create_user(&test.state.db, "acme", UserRole::Partner).await?;
    let alumnus = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let job = factory::create_job(&test.state.db, partner.id, ApprovalStatus::Approved, true).await?;

    let result = apply_to_job(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: alumnus.id,
            role: alumnus.role,
        },
        Path(job.id),
        Json(ApplyToJobDto { resume_key: None }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests that a second application to the same posting conflicts.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn conflict_for_duplicate_application() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::Job,
        entity::prelude::JobApplication
    )?;

    let partner = factory::create_user(&test.state.db, "acme", UserRole::Partner).await?;
    let alumnus = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let job = factory::create_job(&test.state.db, partner.id, ApprovalStatus::Approved, true).await?;
    factory::create_application(&test.state.db, job.id, alumnus.id).await?;

    let result = apply_to_job(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: alumnus.id,
            role: alumnus.role,
        },
        Path(job.id),
        Json(ApplyToJobDto { resume_key: None }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests that a partner account cannot apply.
///
/// Expected: Err with 403 FORBIDDEN response
#[tokio::test]
async fn forbidden_for_partner_account() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::Job,
        entity::prelude::JobApplication
    )?;

    let partner = factory::create_user(&test.state.db, "acme", UserRole::Partner).await?;
    let job = factory::create_job(&test.state.db, partner.id, ApprovalStatus::Approved, true).await?;

    let result = apply_to_job(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: partner.id,
            role: partner.role,
        },
        Path(job.id),
        Json(ApplyToJobDto { resume_key: None }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
