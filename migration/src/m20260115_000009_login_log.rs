use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_portal_user::PortalUser;

static IDX_LOGIN_LOG_LOGGED_AT: &str = "idx-login_log-logged_at";
static FK_LOGIN_LOG_USER_ID: &str = "fk-login_log-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoginLog::Table)
                    .if_not_exists()
                    .col(pk_auto(LoginLog::Id))
                    .col(integer_null(LoginLog::UserId))
                    .col(string(LoginLog::Username))
                    .col(string_len_null(LoginLog::Role, 16))
                    .col(boolean(LoginLog::Success))
                    .col(timestamp(LoginLog::LoggedAt))
                    .to_owned(),
            )
            .await?;

        // Dashboard analytics filter this table by date range
        manager
            .create_index(
                Index::create()
                    .name(IDX_LOGIN_LOG_LOGGED_AT)
                    .table(LoginLog::Table)
                    .col(LoginLog::LoggedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LOGIN_LOG_USER_ID)
                    .from_tbl(LoginLog::Table)
                    .from_col(LoginLog::UserId)
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
                    .name(FK_LOGIN_LOG_USER_ID)
                    .table(LoginLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LoginLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LoginLog {
    Table,
    Id,
    UserId,
    Username,
    Role,
    Success,
    LoggedAt,
}
