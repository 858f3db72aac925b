use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortalUser::Table)
                    .if_not_exists()
                    .col(pk_auto(PortalUser::Id))
                    .col(string_uniq(PortalUser::Username))
                    .col(string(PortalUser::PasswordHash))
                    .col(string_len(PortalUser::Role, 16))
                    .col(boolean(PortalUser::IsActive).default(true))
                    .col(timestamp(PortalUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortalUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PortalUser {
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
    IsActive,
    CreatedAt,
}
