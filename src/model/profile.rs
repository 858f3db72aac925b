use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AlumniProfileDto {
    pub user_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub country: String,
    pub region: String,
    pub city: String,
    pub street_address: String,
    pub department: String,
    pub program: String,
    pub batch_year: i32,
    pub resume_key: Option<String>,
    pub current_employer: Option<String>,
    pub current_position: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<entity::alumni_profile::Model> for AlumniProfileDto {
    fn from(profile: entity::alumni_profile::Model) -> Self {
        Self {
            user_id: profile.user_id,
            first_name: profile.first_name,
            middle_name: profile.middle_name,
            last_name: profile.last_name,
            gender: profile.gender,
            birth_date: profile.birth_date,
            country: profile.country,
            region: profile.region,
            city: profile.city,
            street_address: profile.street_address,
            department: profile.department,
            program: profile.program,
            batch_year: profile.batch_year,
            resume_key: profile.resume_key,
            current_employer: profile.current_employer,
            current_position: profile.current_position,
            updated_at: profile.updated_at,
        }
    }
}

/// Editable subset of the alumni profile.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateAlumniProfileDto {
    pub country: String,
    pub region: String,
    pub city: String,
    pub street_address: String,
    #[serde(default)]
    pub resume_key: Option<String>,
    #[serde(default)]
    pub current_employer: Option<String>,
    #[serde(default)]
    pub current_position: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PartnerCompanyDto {
    pub user_id: i32,
    pub company_name: String,
    pub industry: String,
    pub contract_start: NaiveDate,
    pub contract_end: NaiveDate,
    pub contract_key: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl From<entity::partner_company::Model> for PartnerCompanyDto {
    fn from(company: entity::partner_company::Model) -> Self {
        Self {
            user_id: company.user_id,
            company_name: company.company_name,
            industry: company.industry,
            contract_start: company.contract_start,
            contract_end: company.contract_end,
            contract_key: company.contract_key,
            contact_name: company.contact_name,
            contact_email: company.contact_email,
            contact_phone: company.contact_phone,
        }
    }
}

/// Editable subset of the partner company record. Contract dates are managed
/// by administrators, not by the partner.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePartnerCompanyDto {
    pub industry: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}
