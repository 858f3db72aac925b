use entity::enums::ApprovalStatus;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::donation::SubmitDonationDriveDto,
    server::{
        data::donation::DonationDriveRepository,
        error::Error,
        service::approval::{self, ApprovalTarget, BulkOutcome, Submission, Verdict},
    },
};

pub struct DonationDriveService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonationDriveService<'a> {
    /// Creates a new instance of [`DonationDriveService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn submit(
        &self,
        submitted_by: i32,
        submission: SubmitDonationDriveDto,
    ) -> Result<entity::donation_drive::Model, Error> {
        let drive = DonationDriveRepository::new(self.db)
            .create(submitted_by, submission)
            .await?;

        Ok(drive)
    }

    pub async fn approve(&self, drive_id: i32) -> Result<(), Error> {
        approval::decide(
            self.db,
            &DonationDriveModeration { db: self.db },
            drive_id,
            &Verdict::Approve,
        )
        .await
    }

    pub async fn deny(&self, drive_id: i32, reason: String) -> Result<(), Error> {
        approval::decide(
            self.db,
            &DonationDriveModeration { db: self.db },
            drive_id,
            &Verdict::Deny { reason },
        )
        .await
    }

    pub async fn approve_bulk(&self, ids: &[i32]) -> Result<BulkOutcome, Error> {
        approval::decide_bulk(
            self.db,
            &DonationDriveModeration { db: self.db },
            ids,
            &Verdict::Approve,
        )
        .await
    }

    pub async fn deny_bulk(&self, ids: &[i32], reason: String) -> Result<BulkOutcome, Error> {
        approval::decide_bulk(
            self.db,
            &DonationDriveModeration { db: self.db },
            ids,
            &Verdict::Deny { reason },
        )
        .await
    }
}

/// Moderation adapter over the donation drive repository.
pub struct DonationDriveModeration<'a> {
    pub db: &'a DatabaseConnection,
}

impl ApprovalTarget for DonationDriveModeration<'_> {
    const LABEL: &'static str = "donation drive";

    fn route(&self, id: i32) -> String {
        format!("/donation-drives/{}", id)
    }

    async fn load(&self, id: i32) -> Result<Option<Submission>, DbErr> {
        let drive = DonationDriveRepository::new(self.db).get_by_id(id).await?;

        Ok(drive.map(|drive| Submission {
            status: drive.status,
            submitted_by: drive.submitted_by,
            title: drive.title,
        }))
    }

    async fn store(
        &self,
        id: i32,
        status: ApprovalStatus,
        denial_reason: Option<String>,
    ) -> Result<(), DbErr> {
        DonationDriveRepository::new(self.db)
            .update_status(id, status, denial_reason)
            .await?;

        Ok(())
    }
}
