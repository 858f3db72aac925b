//! Tests for the refresh endpoint.
//!
//! Verifies that a refresh token mints a new access token, that an access
//! token cannot be used in its place, and that deactivated accounts are cut
//! off at refresh time.

use alumnet::server::{
    controller::auth::refresh,
    data::user::UserRepository,
    model::{
        app::AppState,
        auth::{Claims, TokenUse, REFRESH_TOKEN_COOKIE},
    },
};
use alumnet_test_utils::prelude::*;
use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::{cookie::Cookie, CookieJar};
use chrono::Utc;
use entity::enums::UserRole;

fn jar_with_refresh_token(user: &entity::user::Model, token_use: TokenUse) -> CookieJar {
    let token = Claims::new(user.id, user.role, token_use, 3600, Utc::now())
        .encode(TEST_JWT_SECRET)
        .unwrap();

    CookieJar::new().add(Cookie::new(REFRESH_TOKEN_COOKIE, token))
}

/// Tests that a valid refresh token yields a fresh access cookie.
///
/// Expected: Ok with 200 OK response and an access-token Set-Cookie header
#[tokio::test]
async fn success_mints_access_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let user = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let jar = jar_with_refresh_token(&user, TokenUse::Refresh);

    let result = refresh(State(test.state::<AppState>()), jar).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let cookies: Vec<String> = resp
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("access-token=")));

    Ok(())
}

/// Tests that an access token in the refresh cookie is rejected.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_for_access_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let user = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let jar = jar_with_refresh_token(&user, TokenUse::Access);

    let result = refresh(State(test.state::<AppState>()), jar).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests that a missing refresh cookie is rejected.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_without_cookie() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let result = refresh(State(test.state::<AppState>()), CookieJar::new()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests that a deactivated account cannot refresh its session.
///
/// Expected: Err with 403 FORBIDDEN response
#[tokio::test]
async fn forbidden_for_inactive_account() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let user = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let jar = jar_with_refresh_token(&user, TokenUse::Refresh);

    UserRepository::new(&test.state.db)
        .set_active(user.id, false)
        .await?;

    let result = refresh(State(test.state::<AppState>()), jar).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
