//! Tests for the event moderation endpoints.
//!
//! Drives the approve and deny handlers with constructed identities to check
//! role enforcement and the terminal-transition conflict.

use alumnet::{
    model::api::DecisionReasonDto,
    server::{
        controller::event::{approve_event, deny_event},
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

/// Tests that an administrator can approve a pending event.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn admin_approves_pending_event() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::Event,
        entity::prelude::Notification
    )?;

    let admin = factory::create_user(&test.state.db, "admin", UserRole::Admin).await?;
    let submitter = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let event = factory::create_event(&test.state.db, submitter.id, ApprovalStatus::Pending).await?;

    let result = approve_event(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: admin.id,
            role: admin.role,
        },
        Path(event.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests that a non-admin cannot decide an event.
///
/// Expected: Err with 403 FORBIDDEN response
#[tokio::test]
async fn forbidden_for_non_admin() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::Event,
        entity::prelude::Notification
    )?;

    let submitter = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let event = factory::create_event(&test.state.db, submitter.id, ApprovalStatus::Pending).await?;

    let result = approve_event(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: submitter.id,
            role: submitter.role,
        },
        Path(event.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests that denying an already-approved event conflicts.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn conflict_for_decided_event() -> Result<(), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::User,
        entity::prelude::Event,
        entity::prelude::Notification
    )?;

    let admin = factory::create_user(&test.state.db, "admin", UserRole::Admin).await?;
    let submitter = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let event =
        factory::create_event(&test.state.db, submitter.id, ApprovalStatus::Approved).await?;

    let result = deny_event(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: admin.id,
            role: admin.role,
        },
        Path(event.id),
        Json(DecisionReasonDto {
            reason: "Too late".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
