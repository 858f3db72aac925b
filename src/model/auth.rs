use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Registration payload for an alumni account.
///
/// The client collects this across a multi-step wizard; the server receives
/// it as a single submission and creates the user plus profile together.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterAlumniDto {
    pub username: String,
    pub password: String,
    pub first_name: String,
    #[serde(default)]
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
    #[serde(default)]
    pub resume_key: Option<String>,
    #[serde(default)]
    pub current_employer: Option<String>,
    #[serde(default)]
    pub current_position: Option<String>,
}

/// Registration payload for a partner company account.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterPartnerDto {
    pub username: String,
    pub password: String,
    pub company_name: String,
    pub industry: String,
    pub contract_start: NaiveDate,
    pub contract_end: NaiveDate,
    #[serde(default)]
    pub contract_key: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}
