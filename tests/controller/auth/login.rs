//! Tests for the login endpoint.
//!
//! Verifies cookie issuance on success, credential rejection, and the
//! inactive-account guard, all through the real handler.

use alumnet::{
    model::auth::LoginDto,
    server::{controller::auth::login, data::user::UserRepository, model::app::AppState},
};
use alumnet_test_utils::prelude::*;
use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;
use entity::enums::UserRole;

/// Tests that a valid login returns 200 and sets both token cookies.
///
/// Expected: Ok with 200 OK response and access/refresh Set-Cookie headers
#[tokio::test]
async fn success_sets_token_cookies() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::LoginLog)?;

    factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;

    let result = login(
        State(test.state::<AppState>()),
        CookieJar::new(),
        Json(LoginDto {
            username: "jdoe".to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

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
    assert!(cookies.iter().any(|c| c.starts_with("refresh-token=")));

    Ok(())
}

/// Tests that a wrong password is rejected with 401.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_for_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::LoginLog)?;

    factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;

    let result = login(
        State(test.state::<AppState>()),
        CookieJar::new(),
        Json(LoginDto {
            username: "jdoe".to_string(),
            password: "wrong".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests that a deactivated account cannot log in.
///
/// Expected: Err with 403 FORBIDDEN response
#[tokio::test]
async fn forbidden_for_inactive_account() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::LoginLog)?;

    let user = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    UserRepository::new(&test.state.db)
        .set_active(user.id, false)
        .await?;

    let result = login(
        State(test.state::<AppState>()),
        CookieJar::new(),
        Json(LoginDto {
            username: "jdoe".to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
