//! Tests for the event submission endpoint.

use alumnet::{
    model::event::SubmitEventDto,
    server::{
        controller::event::submit_event,
        model::{app::AppState, extract::AuthUser},
    },
};
use alumnet_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use entity::enums::{EventType, UserRole};

fn submission() -> SubmitEventDto {
    let day = NaiveDate::from_ymd_opt(2026, 10, 3).unwrap();
    SubmitEventDto {
        title: "Homecoming 2026".to_string(),
        description: "Annual alumni homecoming".to_string(),
        image_key: None,
        starts_at: day.and_hms_opt(18, 0, 0).unwrap(),
        ends_at: day.and_hms_opt(22, 0, 0).unwrap(),
        event_type: EventType::FaceToFace,
        facilitator_id: None,
    }
}

/// Tests that an alumnus can submit an event.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn alumnus_submits_event() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::Event)?;

    let alumnus = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;

    let result = submit_event(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: alumnus.id,
            role: alumnus.role,
        },
        Json(submission()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests that submission is restricted to alumni accounts.
///
/// Expected: Err with 403 FORBIDDEN response for an administrator
#[tokio::test]
async fn forbidden_for_admin() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::Event)?;

    let admin = factory::create_user(&test.state.db, "admin", UserRole::Admin).await?;

    let result = submit_event(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: admin.id,
            role: admin.role,
        },
        Json(submission()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests that submission is restricted to alumni accounts.
///
/// Expected: Err with 403 FORBIDDEN response for a partner
#[tokio::test]
async fn forbidden_for_partner() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::Event)?;

    let partner = factory::create_user(&test.state.db, "acme", UserRole::Partner).await?;

    let result = submit_event(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: partner.id,
            role: partner.role,
        },
        Json(submission()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
