use chrono::NaiveDateTime;
use entity::enums::{ApplicationStatus, ApprovalStatus};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct JobDto {
    pub id: i32,
    pub posted_by: i32,
    pub title: String,
    pub description: String,
    pub company_name: String,
    pub location: String,
    pub status: ApprovalStatus,
    pub denial_reason: Option<String>,
    pub is_accepting: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::job::Model> for JobDto {
    fn from(job: entity::job::Model) -> Self {
        Self {
            id: job.id,
            posted_by: job.posted_by,
            title: job.title,
            description: job.description,
            company_name: job.company_name,
            location: job.location,
            status: job.status,
            denial_reason: job.denial_reason,
            is_accepting: job.is_accepting,
            created_at: job.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PostJobDto {
    pub title: String,
    pub description: String,
    pub company_name: String,
    pub location: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SetAcceptingDto {
    pub is_accepting: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct JobApplicationDto {
    pub id: i32,
    pub job_id: i32,
    pub applicant_id: i32,
    pub resume_key: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: NaiveDateTime,
}

impl From<entity::job_application::Model> for JobApplicationDto {
    fn from(application: entity::job_application::Model) -> Self {
        Self {
            id: application.id,
            job_id: application.job_id,
            applicant_id: application.applicant_id,
            resume_key: application.resume_key,
            status: application.status,
            created_at: application.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplyToJobDto {
    #[serde(default)]
    pub resume_key: Option<String>,
}

/// Decision on an application: `accepted` or `rejected`.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SetApplicationStatusDto {
    pub status: ApplicationStatus,
}
