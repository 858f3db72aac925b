//! Tests for the current-user endpoint, driven through the full router.
//!
//! These go through HTTP rather than calling the handler directly so the
//! cookie extractor is exercised end to end.

use alumnet::server::{
    model::{
        app::AppState,
        auth::{Claims, TokenUse, ACCESS_TOKEN_COOKIE},
    },
    router,
};
use alumnet_test_utils::prelude::*;
use axum::{
    body::Body,
    http::{header::COOKIE, Request, StatusCode},
};
use chrono::Utc;
use entity::enums::UserRole;
use tower::ServiceExt;

/// Tests that a valid access cookie authenticates the request.
///
/// Expected: 200 OK response
#[tokio::test]
async fn success_with_access_cookie() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let user = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let token = Claims::new(user.id, user.role, TokenUse::Access, 900, Utc::now())
        .encode(TEST_JWT_SECRET)
        .unwrap();

    let routes = router::routes().with_state(test.state::<AppState>());

    let response = routes
        .oneshot(
            Request::builder()
                .uri("/api/auth/user")
                .header(COOKIE, format!("{}={}", ACCESS_TOKEN_COOKIE, token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Tests that the endpoint rejects a request without a cookie.
///
/// Expected: 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_without_cookie() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let routes = router::routes().with_state(test.state::<AppState>());

    let response = routes
        .oneshot(
            Request::builder()
                .uri("/api/auth/user")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests that a refresh token cannot authenticate a normal request.
///
/// Expected: 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_with_refresh_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let user = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let token = Claims::new(user.id, user.role, TokenUse::Refresh, 900, Utc::now())
        .encode(TEST_JWT_SECRET)
        .unwrap();

    let routes = router::routes().with_state(test.state::<AppState>());

    let response = routes
        .oneshot(
            Request::builder()
                .uri("/api/auth/user")
                .header(COOKIE, format!("{}={}", ACCESS_TOKEN_COOKIE, token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
