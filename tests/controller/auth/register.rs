//! Tests for the registration endpoints.

use alumnet::{
    model::auth::RegisterAlumniDto,
    server::{controller::auth::register_alumni, model::app::AppState},
};
use alumnet_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use entity::enums::UserRole;

fn registration(username: &str) -> RegisterAlumniDto {
    RegisterAlumniDto {
        username: username.to_string(),
        password: TEST_PASSWORD.to_string(),
        first_name: "Jane".to_string(),
        middle_name: None,
        last_name: "Doe".to_string(),
        gender: "female".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1998, 4, 12).unwrap(),
        country: "Philippines".to_string(),
        region: "NCR".to_string(),
        city: "Manila".to_string(),
        street_address: "12 Sampaguita St".to_string(),
        department: "Engineering".to_string(),
        program: "Computer Engineering".to_string(),
        batch_year: 2019,
        resume_key: None,
        current_employer: None,
        current_position: None,
    }
}

/// Tests that registering a fresh username creates the account.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn success_creates_account() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::AlumniProfile)?;

    let result = register_alumni(State(test.state::<AppState>()), Json(registration("jdoe"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests that a taken username is rejected with 400.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_taken_username() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::AlumniProfile)?;

    factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;

    let result = register_alumni(State(test.state::<AppState>()), Json(registration("jdoe"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
