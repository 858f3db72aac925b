use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_portal_user::PortalUser;

static FK_ALUMNI_PROFILE_USER_ID: &str = "fk-alumni_profile-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AlumniProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(AlumniProfile::Id))
                    .col(integer_uniq(AlumniProfile::UserId))
                    .col(string(AlumniProfile::FirstName))
                    .col(string_null(AlumniProfile::MiddleName))
                    .col(string(AlumniProfile::LastName))
                    .col(string(AlumniProfile::Gender))
                    .col(date(AlumniProfile::BirthDate))
                    .col(string(AlumniProfile::Country))
                    .col(string(AlumniProfile::Region))
                    .col(string(AlumniProfile::City))
                    .col(string(AlumniProfile::StreetAddress))
                    .col(string(AlumniProfile::Department))
                    .col(string(AlumniProfile::Program))
                    .col(integer(AlumniProfile::BatchYear))
                    .col(string_null(AlumniProfile::ResumeKey))
                    .col(string_null(AlumniProfile::CurrentEmployer))
                    .col(string_null(AlumniProfile::CurrentPosition))
                    .col(timestamp(AlumniProfile::CreatedAt))
                    .col(timestamp(AlumniProfile::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALUMNI_PROFILE_USER_ID)
                    .from_tbl(AlumniProfile::Table)
                    .from_col(AlumniProfile::UserId)
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
                    .name(FK_ALUMNI_PROFILE_USER_ID)
                    .table(AlumniProfile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AlumniProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AlumniProfile {
    Table,
    Id,
    UserId,
    FirstName,
    MiddleName,
    LastName,
    Gender,
    BirthDate,
    Country,
    Region,
    City,
    StreetAddress,
    Department,
    Program,
    BatchYear,
    ResumeKey,
    CurrentEmployer,
    CurrentPosition,
    CreatedAt,
    UpdatedAt,
}
