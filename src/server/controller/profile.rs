use axum::{extract::State, response::IntoResponse, Json};
use entity::enums::UserRole;

use crate::{
    model::{
        api::ErrorDto,
        profile::{
            AlumniProfileDto, PartnerCompanyDto, UpdateAlumniProfileDto, UpdatePartnerCompanyDto,
        },
    },
    server::{
        data::{alumni::AlumniProfileRepository, company::PartnerCompanyRepository},
        error::Error,
        model::{app::AppState, extract::AuthUser},
    },
};

pub static PROFILE_TAG: &str = "profile";

/// Get the authenticated alumnus's profile
#[utoipa::path(
    get,
    path = "/api/profile/alumni",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Alumni profile", body = AlumniProfileDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not an alumni account", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alumni_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    auth.require_role(UserRole::Alumni)?;

    let profile = AlumniProfileRepository::new(&state.db)
        .get_by_user_id(auth.user_id)
        .await?
        .ok_or(Error::NotFound("Profile"))?;

    Ok(Json(AlumniProfileDto::from(profile)))
}

/// Update the editable fields of the authenticated alumnus's profile
#[utoipa::path(
    put,
    path = "/api/profile/alumni",
    tag = PROFILE_TAG,
    request_body = UpdateAlumniProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = AlumniProfileDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not an alumni account", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_alumni_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(update): Json<UpdateAlumniProfileDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_role(UserRole::Alumni)?;

    let profile = AlumniProfileRepository::new(&state.db)
        .update(auth.user_id, update)
        .await?
        .ok_or(Error::NotFound("Profile"))?;

    Ok(Json(AlumniProfileDto::from(profile)))
}

/// Get the authenticated partner's company record
#[utoipa::path(
    get,
    path = "/api/profile/company",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Partner company", body = PartnerCompanyDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a partner account", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    auth.require_role(UserRole::Partner)?;

    let company = PartnerCompanyRepository::new(&state.db)
        .get_by_user_id(auth.user_id)
        .await?
        .ok_or(Error::NotFound("Company"))?;

    Ok(Json(PartnerCompanyDto::from(company)))
}

/// Update the partner-editable contact fields of the company record
#[utoipa::path(
    put,
    path = "/api/profile/company",
    tag = PROFILE_TAG,
    request_body = UpdatePartnerCompanyDto,
    responses(
        (status = 200, description = "Updated company", body = PartnerCompanyDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a partner account", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_company(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(update): Json<UpdatePartnerCompanyDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_role(UserRole::Partner)?;

    let company = PartnerCompanyRepository::new(&state.db)
        .update(auth.user_id, update)
        .await?
        .ok_or(Error::NotFound("Company"))?;

    Ok(Json(PartnerCompanyDto::from(company)))
}
