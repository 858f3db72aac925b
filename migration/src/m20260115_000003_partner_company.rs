use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_portal_user::PortalUser;

static FK_PARTNER_COMPANY_USER_ID: &str = "fk-partner_company-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartnerCompany::Table)
                    .if_not_exists()
                    .col(pk_auto(PartnerCompany::Id))
                    .col(integer_uniq(PartnerCompany::UserId))
                    .col(string(PartnerCompany::CompanyName))
                    .col(string(PartnerCompany::Industry))
                    .col(date(PartnerCompany::ContractStart))
                    .col(date(PartnerCompany::ContractEnd))
                    .col(string_null(PartnerCompany::ContractKey))
                    .col(string(PartnerCompany::ContactName))
                    .col(string(PartnerCompany::ContactEmail))
                    .col(string(PartnerCompany::ContactPhone))
                    .col(timestamp(PartnerCompany::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARTNER_COMPANY_USER_ID)
                    .from_tbl(PartnerCompany::Table)
                    .from_col(PartnerCompany::UserId)
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
                    .name(FK_PARTNER_COMPANY_USER_ID)
                    .table(PartnerCompany::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PartnerCompany::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PartnerCompany {
    Table,
    Id,
    UserId,
    CompanyName,
    Industry,
    ContractStart,
    ContractEnd,
    ContractKey,
    ContactName,
    ContactEmail,
    ContactPhone,
    CreatedAt,
}
