use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000001_portal_user::PortalUser, m20260115_000006_job::Job};

static IDX_JOB_APPLICATION_UNIQUE: &str = "idx-job_application-job_id-applicant_id";
static FK_JOB_APPLICATION_JOB_ID: &str = "fk-job_application-job_id";
static FK_JOB_APPLICATION_APPLICANT_ID: &str = "fk-job_application-applicant_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(JobApplication::Id))
                    .col(integer(JobApplication::JobId))
                    .col(integer(JobApplication::ApplicantId))
                    .col(string_null(JobApplication::ResumeKey))
                    .col(string_len(JobApplication::Status, 16))
                    .col(timestamp(JobApplication::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // One application per alumnus per posting
        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_APPLICATION_UNIQUE)
                    .table(JobApplication::Table)
                    .col(JobApplication::JobId)
                    .col(JobApplication::ApplicantId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOB_APPLICATION_JOB_ID)
                    .from_tbl(JobApplication::Table)
                    .from_col(JobApplication::JobId)
                    .to_tbl(Job::Table)
                    .to_col(Job::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOB_APPLICATION_APPLICANT_ID)
                    .from_tbl(JobApplication::Table)
                    .from_col(JobApplication::ApplicantId)
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
                    .name(FK_JOB_APPLICATION_APPLICANT_ID)
                    .table(JobApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_JOB_APPLICATION_JOB_ID)
                    .table(JobApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobApplication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum JobApplication {
    Table,
    Id,
    JobId,
    ApplicantId,
    ResumeKey,
    Status,
    CreatedAt,
}
