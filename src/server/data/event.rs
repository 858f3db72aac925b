use chrono::Utc;
use entity::enums::ApprovalStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::event::SubmitEventDto;

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a submitted event in the `Pending` state
    pub async fn create(
        &self,
        submitted_by: i32,
        submission: SubmitEventDto,
    ) -> Result<entity::event::Model, DbErr> {
        let event = entity::event::ActiveModel {
            title: ActiveValue::Set(submission.title),
            description: ActiveValue::Set(submission.description),
            image_key: ActiveValue::Set(submission.image_key),
            starts_at: ActiveValue::Set(submission.starts_at),
            ends_at: ActiveValue::Set(submission.ends_at),
            event_type: ActiveValue::Set(submission.event_type),
            facilitator_id: ActiveValue::Set(submission.facilitator_id),
            status: ActiveValue::Set(ApprovalStatus::Pending),
            denial_reason: ActiveValue::Set(None),
            submitted_by: ActiveValue::Set(submitted_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn get_by_id(&self, event_id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(event_id).one(self.db).await
    }

    /// Lists events in the given status, newest first
    pub async fn list_by_status(
        &self,
        status: ApprovalStatus,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::Status.eq(status))
            .order_by_desc(entity::event::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Writes a moderation decision onto the record
    ///
    /// Returns `None` when the event does not exist. The caller is
    /// responsible for checking the current status first.
    pub async fn update_status(
        &self,
        event_id: i32,
        status: ApprovalStatus,
        denial_reason: Option<String>,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        let Some(event) = self.get_by_id(event_id).await? else {
            return Ok(None);
        };

        let mut event: entity::event::ActiveModel = event.into();
        event.status = ActiveValue::Set(status);
        event.denial_reason = ActiveValue::Set(denial_reason);

        Ok(Some(event.update(self.db).await?))
    }

    pub async fn count_by_status(&self, status: ApprovalStatus) -> Result<u64, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}
