//! Tests for the partner company endpoints.

use alumnet::{
    model::{auth::RegisterPartnerDto, profile::UpdatePartnerCompanyDto},
    server::{
        controller::profile::{get_company, update_company},
        data::company::PartnerCompanyRepository,
        model::{app::AppState, extract::AuthUser},
    },
};
use alumnet_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use entity::enums::UserRole;

fn registration() -> RegisterPartnerDto {
    RegisterPartnerDto {
        username: "acme".to_string(),
        password: TEST_PASSWORD.to_string(),
        company_name: "Acme Corp".to_string(),
        industry: "Manufacturing".to_string(),
        contract_start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        contract_end: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        contract_key: None,
        contact_name: "Sam Reyes".to_string(),
        contact_email: "sam@acme.example".to_string(),
        contact_phone: "+63 912 555 0100".to_string(),
    }
}

fn new_contact() -> UpdatePartnerCompanyDto {
    UpdatePartnerCompanyDto {
        industry: "Logistics".to_string(),
        contact_name: "Alex Cruz".to_string(),
        contact_email: "alex@acme.example".to_string(),
        contact_phone: "+63 917 555 0200".to_string(),
    }
}

/// Tests that a partner can fetch their own company record.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn returns_own_company() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::PartnerCompany)?;

    let user = factory::create_user(&test.state.db, "acme", UserRole::Partner).await?;
    PartnerCompanyRepository::new(&test.state.db)
        .create(user.id, registration())
        .await?;

    let result = get_company(
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

/// Tests that updating the company persists the new contact fields.
///
/// Expected: Ok with 200 OK response and the new contact stored
#[tokio::test]
async fn update_persists_contact() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::PartnerCompany)?;

    let user = factory::create_user(&test.state.db, "acme", UserRole::Partner).await?;
    let repository = PartnerCompanyRepository::new(&test.state.db);
    repository.create(user.id, registration()).await?;

    let result = update_company(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: user.id,
            role: user.role,
        },
        Json(new_contact()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = repository.get_by_user_id(user.id).await?.unwrap();
    assert_eq!(stored.contact_name, "Alex Cruz");
    assert_eq!(stored.company_name, "Acme Corp");

    Ok(())
}

/// Tests that a partner without a company row gets 404.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_without_company_row() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::PartnerCompany)?;

    let user = factory::create_user(&test.state.db, "acme", UserRole::Partner).await?;

    let result = get_company(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: user.id,
            role: user.role,
        },
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that an alumni account cannot read the company endpoint.
///
/// Expected: Err with 403 FORBIDDEN response
#[tokio::test]
async fn forbidden_for_alumni() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::PartnerCompany)?;

    let alumnus = factory::create_user(&test.state.db, "jdoe", UserRole::Alumni).await?;

    let result = get_company(
        State(test.state::<AppState>()),
        AuthUser {
            user_id: alumnus.id,
            role: alumnus.role,
        },
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
