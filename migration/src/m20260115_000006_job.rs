use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_portal_user::PortalUser;

static IDX_JOB_STATUS: &str = "idx-job-status";
static FK_JOB_POSTED_BY: &str = "fk-job-posted_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_auto(Job::Id))
                    .col(integer(Job::PostedBy))
                    .col(string(Job::Title))
                    .col(text(Job::Description))
                    .col(string(Job::CompanyName))
                    .col(string(Job::Location))
                    .col(string_len(Job::Status, 16))
                    .col(string_null(Job::DenialReason))
                    .col(boolean(Job::IsAccepting).default(true))
                    .col(timestamp(Job::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_STATUS)
                    .table(Job::Table)
                    .col(Job::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOB_POSTED_BY)
                    .from_tbl(Job::Table)
                    .from_col(Job::PostedBy)
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
                    .name(FK_JOB_POSTED_BY)
                    .table(Job::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Job {
    Table,
    Id,
    PostedBy,
    Title,
    Description,
    CompanyName,
    Location,
    Status,
    DenialReason,
    IsAccepting,
    CreatedAt,
}
