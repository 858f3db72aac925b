use chrono::Utc;
use entity::enums::ApprovalStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::donation::SubmitDonationDriveDto;

pub struct DonationDriveRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonationDriveRepository<'a> {
    /// Creates a new instance of [`DonationDriveRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a submitted donation drive in the `Pending` state
    pub async fn create(
        &self,
        submitted_by: i32,
        submission: SubmitDonationDriveDto,
    ) -> Result<entity::donation_drive::Model, DbErr> {
        let drive = entity::donation_drive::ActiveModel {
            title: ActiveValue::Set(submission.title),
            description: ActiveValue::Set(submission.description),
            image_key: ActiveValue::Set(submission.image_key),
            status: ActiveValue::Set(ApprovalStatus::Pending),
            denial_reason: ActiveValue::Set(None),
            submitted_by: ActiveValue::Set(submitted_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        drive.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        drive_id: i32,
    ) -> Result<Option<entity::donation_drive::Model>, DbErr> {
        entity::prelude::DonationDrive::find_by_id(drive_id)
            .one(self.db)
            .await
    }

    pub async fn list_by_status(
        &self,
        status: ApprovalStatus,
    ) -> Result<Vec<entity::donation_drive::Model>, DbErr> {
        entity::prelude::DonationDrive::find()
            .filter(entity::donation_drive::Column::Status.eq(status))
            .order_by_desc(entity::donation_drive::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Writes a moderation decision onto the record
    ///
    /// Returns `None` when the drive does not exist.
    pub async fn update_status(
        &self,
        drive_id: i32,
        status: ApprovalStatus,
        denial_reason: Option<String>,
    ) -> Result<Option<entity::donation_drive::Model>, DbErr> {
        let Some(drive) = self.get_by_id(drive_id).await? else {
            return Ok(None);
        };

        let mut drive: entity::donation_drive::ActiveModel = drive.into();
        drive.status = ActiveValue::Set(status);
        drive.denial_reason = ActiveValue::Set(denial_reason);

        Ok(Some(drive.update(self.db).await?))
    }

    pub async fn count_by_status(&self, status: ApprovalStatus) -> Result<u64, DbErr> {
        entity::prelude::DonationDrive::find()
            .filter(entity::donation_drive::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}
