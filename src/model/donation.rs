use chrono::NaiveDateTime;
use entity::enums::ApprovalStatus;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DonationDriveDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_key: Option<String>,
    pub status: ApprovalStatus,
    pub denial_reason: Option<String>,
    pub submitted_by: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::donation_drive::Model> for DonationDriveDto {
    fn from(drive: entity::donation_drive::Model) -> Self {
        Self {
            id: drive.id,
            title: drive.title,
            description: drive.description,
            image_key: drive.image_key,
            status: drive.status,
            denial_reason: drive.denial_reason,
            submitted_by: drive.submitted_by,
            created_at: drive.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SubmitDonationDriveDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_key: Option<String>,
}
