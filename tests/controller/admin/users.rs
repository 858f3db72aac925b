//! Tests for the admin user management endpoints.

use alumnet::{
    model::user::SetActiveDto,
    server::{
        controller::admin::set_user_active,
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
use entity::enums::UserRole;

/// Tests that an administrator can deactivate an account.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn admin_deactivates_account() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let admin = factory::create_user(&test.state.db, "admin", UserRole::Admin).await?;
    let user = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;

    let result = set_user_active(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: admin.id,
            role: admin.role,
        },
        Path(user.id),
        Json(SetActiveDto { is_active: false }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests that deactivating an unknown account returns 404.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_unknown_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let admin = factory::create_user(&test.state.db, "admin", UserRole::Admin).await?;

    let result = set_user_active(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: admin.id,
            role: admin.role,
        },
        Path(999),
        Json(SetActiveDto { is_active: false }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that a non-admin cannot manage accounts.
///
/// Expected: Err with 403 FORBIDDEN response
#[tokio::test]
async fn forbidden_for_non_admin() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let user = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;

    let result = set_user_active(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: user.id,
            role: user.role,
        },
        Path(user.id),
        Json(SetActiveDto { is_active: false }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
