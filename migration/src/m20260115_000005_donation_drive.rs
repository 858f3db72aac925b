use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_portal_user::PortalUser;

static IDX_DONATION_DRIVE_STATUS: &str = "idx-donation_drive-status";
static FK_DONATION_DRIVE_SUBMITTED_BY: &str = "fk-donation_drive-submitted_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DonationDrive::Table)
                    .if_not_exists()
                    .col(pk_auto(DonationDrive::Id))
                    .col(string(DonationDrive::Title))
                    .col(text(DonationDrive::Description))
                    .col(string_null(DonationDrive::ImageKey))
                    .col(string_len(DonationDrive::Status, 16))
                    .col(string_null(DonationDrive::DenialReason))
                    .col(integer(DonationDrive::SubmittedBy))
                    .col(timestamp(DonationDrive::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DONATION_DRIVE_STATUS)
                    .table(DonationDrive::Table)
                    .col(DonationDrive::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DONATION_DRIVE_SUBMITTED_BY)
                    .from_tbl(DonationDrive::Table)
                    .from_col(DonationDrive::SubmittedBy)
                    .to_tbl(PortalUser::Table)
                    .to_col(PortalUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DONATION_DRIVE_SUBMITTED_BY)
                    .table(DonationDrive::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DonationDrive::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DonationDrive {
    Table,
    Id,
    Title,
    Description,
    ImageKey,
    Status,
    DenialReason,
    SubmittedBy,
    CreatedAt,
}
