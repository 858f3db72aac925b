use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_portal_user::PortalUser;

static IDX_EVENT_STATUS: &str = "idx-event-status";
static FK_EVENT_SUBMITTED_BY: &str = "fk-event-submitted_by";
static FK_EVENT_FACILITATOR_ID: &str = "fk-event-facilitator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(text(Event::Description))
                    .col(string_null(Event::ImageKey))
                    .col(timestamp(Event::StartsAt))
                    .col(timestamp(Event::EndsAt))
                    .col(string_len(Event::EventType, 16))
                    .col(integer_null(Event::FacilitatorId))
                    .col(string_len(Event::Status, 16))
                    .col(string_null(Event::DenialReason))
                    .col(integer(Event::SubmittedBy))
                    .col(timestamp(Event::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_STATUS)
                    .table(Event::Table)
                    .col(Event::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_SUBMITTED_BY)
                    .from_tbl(Event::Table)
                    .from_col(Event::SubmittedBy)
                    .to_tbl(PortalUser::Table)
                    .to_col(PortalUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_FACILITATOR_ID)
                    .from_tbl(Event::Table)
                    .from_col(Event::FacilitatorId)
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
                    .name(FK_EVENT_FACILITATOR_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVENT_SUBMITTED_BY)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Description,
    ImageKey,
    StartsAt,
    EndsAt,
    EventType,
    FacilitatorId,
    Status,
    DenialReason,
    SubmittedBy,
    CreatedAt,
}
