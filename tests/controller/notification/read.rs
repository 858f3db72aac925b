//! Tests for the notification read endpoints.

use alumnet::server::{
    controller::notification::mark_notification_read,
    model::{app::AppState, extract::AuthUser},
};
use alumnet_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::enums::UserRole;

/// Tests that a user can mark their own notification as read.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_marks_own_notification() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::Notification)?;

    let user = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let notification =
        factory::create_notification(&test.state.db, user.id, "Your event was approved.").await?;

    let result = mark_notification_read(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: user.id,
            role: user.role,
        },
        Path(notification.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests that another user's notification cannot be marked read.
///
/// Expected: Err with 403 FORBIDDEN response
#[tokio::test]
async fn forbidden_for_foreign_notification() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::Notification)?;

    let owner = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let other = factory::create_user(&test.state.db, "asmith", UserRole::Alumni).await?;
    let notification =
        factory::create_notification(&test.state.db, owner.id, "Your event was approved.").await?;

    let result = mark_notification_read(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: other.id,
            role: other.role,
        },
        Path(notification.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
