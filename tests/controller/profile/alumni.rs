//! Tests for the alumni profile endpoints.

use alumnet::{
    model::{auth::RegisterAlumniDto, profile::UpdateAlumniProfileDto},
    server::{
        controller::profile::{get_alumni_profile, update_alumni_profile},
        data::alumni::AlumniProfileRepository,
        model::{app::AppState, extract::AuthUser},
    },
};
use alumnet_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use entity::enums::UserRole;

fn registration() -> RegisterAlumniDto {
    RegisterAlumniDto {
        username: "jdoe".to_string(),
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

fn relocation() -> UpdateAlumniProfileDto {
    UpdateAlumniProfileDto {
        country: "Singapore".to_string(),
        region: "Central".to_string(),
        city: "Singapore".to_string(),
        street_address: "5 Temasek Ave".to_string(),
        resume_key: None,
        current_employer: Some("Globex".to_string()),
        current_position: Some("Site Reliability Engineer".to_string()),
    }
}

/// Tests that an alumnus can fetch their own profile.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn returns_own_profile() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::AlumniProfile)?;

    let user = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    AlumniProfileRepository::new(&test.state.db)
        .create(user.id, registration())
        .await?;

    let result = get_alumni_profile(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: user.id,
            role: user.role,
        },
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests that updating the profile persists the new fields.
///
/// Expected: Ok with 200 OK response and the new country stored
#[tokio::test]
async fn update_persists_fields() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::AlumniProfile)?;

    let user = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;
    let repository = AlumniProfileRepository::new(&test.state.db);
    repository.create(user.id, registration()).await?;

    let result = update_alumni_profile(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: user.id,
            role: user.role,
        },
        Json(relocation()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = repository.get_by_user_id(user.id).await?.unwrap();
    assert_eq!(stored.country, "Singapore");
    assert_eq!(stored.current_employer.as_deref(), Some("Globex"));

    Ok(())
}

/// Tests that a user without a profile row gets 404.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_without_profile_row() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::AlumniProfile)?;

    let user = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;

    let result = update_alumni_profile(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: user.id,
            role: user.role,
        },
        Json(relocation()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that a partner account cannot read the alumni profile endpoint.
///
/// Expected: Err with 403 FORBIDDEN response
#[tokio::test]
async fn forbidden_for_partner() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::AlumniProfile)?;

    let partner = factory::create_user(&test.state.db, "acme", UserRole::Partner).await?;

    let result = get_alumni_profile(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: partner.id,
            role: partner.role,
        },
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
